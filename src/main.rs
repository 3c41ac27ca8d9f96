use bedrock_llm_rs::{init_logging, BedrockLlm, BedrockLlmConfig, Mode};
use clap::{Arg, ArgAction, Command};
use futures::StreamExt;
use std::io::{self, Write};

fn cli() -> Command {
    Command::new("bedrock-llm-rs")
        .version("0.1.0")
        .about("Stream a single conversation turn from an AWS Bedrock model")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("JSON config file, missing fields use defaults")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("TEXT")
                .help("User input to send")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_parser(["chat", "translate"])
                .action(ArgAction::Set),
        )
        .arg(Arg::new("region").long("region").action(ArgAction::Set))
        .arg(Arg::new("model").long("model").action(ArgAction::Set))
        .arg(
            Arg::new("input-language")
                .long("input-language")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output-language")
                .long("output-language")
                .action(ArgAction::Set),
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let matches = cli().get_matches();

    let input = matches
        .get_one::<String>("input")
        .cloned()
        .unwrap_or_default();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => BedrockLlmConfig::from_file(path)?,
        None => BedrockLlmConfig::default_config(),
    };
    if let Some(mode) = matches.get_one::<String>("mode") {
        config.mode = mode.parse::<Mode>()?;
    }
    if let Some(region) = matches.get_one::<String>("region") {
        config.region = region.clone();
    }
    if let Some(model) = matches.get_one::<String>("model") {
        config.model = model.as_str().into();
    }
    if let Some(lang) = matches.get_one::<String>("input-language") {
        config.input_language = lang.clone();
    }
    if let Some(lang) = matches.get_one::<String>("output-language") {
        config.output_language = lang.clone();
    }

    let client = BedrockLlm::new(config).await?;

    let messages = vec![client.user_message(&input)];

    let mut stream = client.submit(&messages).await?;
    while let Some(event) = stream.next().await {
        let event = event?;
        if let Some(text) = event.text() {
            let output = serde_json::json!({
                "content": text,
                "role": "assistant"
            });
            println!("{}", serde_json::to_string(&output)?);
            io::stdout().flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_required() {
        assert!(cli().try_get_matches_from(["bedrock-llm-rs"]).is_err());
    }

    #[test]
    fn translate_flags_parse() {
        let matches = cli()
            .try_get_matches_from([
                "bedrock-llm-rs",
                "--input",
                "good morning",
                "--mode",
                "translate",
                "--input-language",
                "English",
                "--output-language",
                "Chinese",
            ])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("input").map(String::as_str),
            Some("good morning")
        );
        assert_eq!(
            matches.get_one::<String>("mode").map(String::as_str),
            Some("translate")
        );
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result = cli().try_get_matches_from([
            "bedrock-llm-rs",
            "--input",
            "hi",
            "--mode",
            "summarize",
        ]);
        assert!(result.is_err());
    }
}
