use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "uibridge-cli")]
#[command(about = "Client CLI for a uibridge application server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the application manifest
    Manifest,
    /// Render a widget by name
    Widget {
        name: String,
        /// JSON data payload
        #[arg(long)]
        data: Option<String>,
        /// JSON props payload
        #[arg(long)]
        props: Option<String>,
    },
    /// Invoke a listener action
    Action {
        name: String,
        /// JSON props payload
        #[arg(long)]
        props: Option<String>,
        /// JSON event payload
        #[arg(long)]
        event: Option<String>,
    },
    /// Fetch a static resource
    Resource { path: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Manifest => {
            let res = client.post(&cli.url).json(&json!({})).send().await?;
            print_response(res).await?;
        }
        Commands::Widget { name, data, props } => {
            let body = json!({
                "widget": name,
                "data": parse_payload(data.as_deref())?,
                "props": parse_payload(props.as_deref())?,
            });
            let res = client.post(&cli.url).json(&body).send().await?;
            print_response(res).await?;
        }
        Commands::Action { name, props, event } => {
            let body = json!({
                "action": name,
                "props": parse_payload(props.as_deref())?,
                "event": parse_payload(event.as_deref())?,
            });
            let res = client.post(&cli.url).json(&body).send().await?;
            let status = res.status();
            if status.is_success() {
                println!("OK ({})", status);
            } else {
                eprintln!("Error: server returned status {}", status);
                if let Ok(text) = res.text().await {
                    eprintln!("Response: {}", text);
                }
            }
        }
        Commands::Resource { path } => {
            let res = client
                .post(&cli.url)
                .json(&json!({ "resource": path }))
                .send()
                .await?;
            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: server returned status {}", status);
                return Ok(());
            }
            let content_type = res
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string();
            let bytes = res.bytes().await?;
            println!("{} ({} bytes)", content_type, bytes.len());
        }
    }

    Ok(())
}

fn parse_payload(raw: Option<&str>) -> Result<Value, serde_json::Error> {
    match raw {
        Some(raw) => serde_json::from_str(raw),
        None => Ok(Value::Null),
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
