mod storage;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use pinterest::{
    ClientConfig, ImageSource, NewPin, OAuthConfig, Page, PinterestClient, PinterestOAuth,
};
use serde_json::Value;

use crate::storage::CredentialStorage;

#[derive(Parser)]
#[command(name = "pinterestctl", about = "Talk to the Pinterest API from the command line")]
struct Cli {
    /// Use this token instead of the one stored by `login`.
    #[arg(long, env = "PINTEREST_ACCESS_TOKEN", global = true, hide_env_values = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authorize this application and store the resulting token.
    Login {
        #[arg(long)]
        redirect_uri: String,
    },
    /// Forget the stored token.
    Logout,
    Me(FieldArgs),
    Boards(FieldArgs),
    Board {
        board: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    BoardPins {
        board: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    Pin {
        pin: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    User {
        username: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    Feed(PageArgs),
    Search {
        query: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Category {
        category: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Followers {
        username: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Following {
        username: String,
        #[command(flatten)]
        page: PageArgs,
    },
    CreatePin(CreatePinArgs),
}

#[derive(Args)]
struct FieldArgs {
    /// Comma-separated list of fields to return.
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,
}

impl FieldArgs {
    fn as_slice(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}

#[derive(Args)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = Page::DEFAULT_LIMIT)]
    limit: u32,
}

impl From<&PageArgs> for Page {
    fn from(args: &PageArgs) -> Self {
        Page::new(args.page, args.limit)
    }
}

#[derive(Args)]
struct CreatePinArgs {
    #[arg(long)]
    board: String,
    #[arg(long)]
    note: String,
    #[arg(long)]
    link: Option<String>,
    #[command(flatten)]
    image: ImageArgs,
}

/// Exactly one image source per pin.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct ImageArgs {
    /// Upload this file.
    #[arg(long)]
    image_file: Option<PathBuf>,
    /// Let Pinterest fetch the image from this URL.
    #[arg(long)]
    image_url: Option<String>,
    /// Send this file inline, base64-encoded.
    #[arg(long)]
    image_inline: Option<PathBuf>,
}

impl ImageArgs {
    async fn image_source(&self) -> Result<ImageSource> {
        if let Some(path) = &self.image_file {
            return Ok(ImageSource::File {
                file_name: file_name(path),
                bytes: read_image(path).await?,
            });
        }
        if let Some(url) = &self.image_url {
            return Ok(ImageSource::Url(url.clone()));
        }
        if let Some(path) = &self.image_inline {
            return Ok(ImageSource::Base64(read_image(path).await?));
        }
        bail!("one of --image-file, --image-url or --image-inline is required")
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

async fn read_image(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("unable to read {}", path.display()))
}

/// Walks the user through authorization and stores the token we are given.
async fn login(redirect_uri: &str) -> Result<()> {
    let oauth = PinterestOAuth::new(OAuthConfig::from_env()?);
    println!("Visit this URL to authorize pinterestctl:");
    println!("{}", oauth.authorization_url(redirect_uri));

    let code = storage::interactive_prompt("Enter the code from the redirect")?;
    let token = oauth.exchange_code(&code).await?;
    let Some(access_token) = token.access_token() else {
        bail!("Pinterest did not issue a token: {}", token.as_value());
    };

    storage::save(&CredentialStorage {
        access_token: access_token.to_string(),
    })?;
    info!("stored access token in the OS keyring");
    Ok(())
}

/// The token given on the command line wins over the stored one.
fn client(access_token: Option<String>) -> Result<PinterestClient> {
    let access_token = match access_token {
        Some(token) => Some(token),
        None => storage::load()?.map(|stored| stored.access_token),
    };
    let client = PinterestClient::with_config(ClientConfig::from_env()?, access_token);
    if !client.has_access_token() {
        bail!("no access token: run `pinterestctl login` or pass --access-token");
    }
    Ok(client)
}

async fn run(cli: Cli) -> Result<Option<Value>> {
    let value = match &cli.command {
        Command::Login { redirect_uri } => {
            login(redirect_uri).await?;
            return Ok(None);
        }
        Command::Logout => {
            storage::clear()?;
            return Ok(None);
        }
        Command::Me(fields) => client(cli.access_token)?.me(&fields.as_slice()).await?,
        Command::Boards(fields) => {
            client(cli.access_token)?
                .boards(&fields.as_slice())
                .await?
        }
        Command::Board { board, fields } => {
            client(cli.access_token)?
                .board(board, &fields.as_slice())
                .await?
        }
        Command::BoardPins { board, fields } => {
            client(cli.access_token)?
                .board_pins(board, &fields.as_slice())
                .await?
        }
        Command::Pin { pin, fields } => {
            client(cli.access_token)?
                .pin(pin, &fields.as_slice())
                .await?
        }
        Command::User { username, fields } => {
            client(cli.access_token)?
                .user(username, &fields.as_slice())
                .await?
        }
        Command::Feed(page) => client(cli.access_token)?.home_feed(page.into()).await?,
        Command::Search { query, page } => {
            client(cli.access_token)?
                .search_pins(query, page.into())
                .await?
        }
        Command::Category { category, page } => {
            client(cli.access_token)?
                .category_feed(category, page.into())
                .await?
        }
        Command::Followers { username, page } => {
            client(cli.access_token)?
                .followers(username, page.into())
                .await?
        }
        Command::Following { username, page } => {
            client(cli.access_token)?
                .following(username, page.into())
                .await?
        }
        Command::CreatePin(args) => {
            let mut pin = NewPin::new(&args.board, &args.note, args.image.image_source().await?);
            if let Some(link) = &args.link {
                pin = pin.with_link(link);
            }
            client(cli.access_token)?.create_pin(&pin).await?
        }
    };
    Ok(Some(value))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(value) = run(cli).await? {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
