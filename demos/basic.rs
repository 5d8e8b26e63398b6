use codegen_http::{ChatMessage, ClientOptions, CodegenClient, GenerationParams};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = CodegenClient::from_env()
        .map_err(anyhow::Error::msg)?
        .with_options(ClientOptions {
            timeout_ms: 30_000,
            max_attempts: 5,
            base_delay_ms: 1_000,
            max_delay_ms: 30_000,
        });

    let completion = client
        .chat(
            "gpt-4o-mini",
            &[
                ChatMessage::system("You are a helpful assistant that writes code snippets."),
                ChatMessage::user(
                    "Write a function `reverse_string` that takes a single string argument \
                     and returns it reversed. Include a short docstring.",
                ),
            ],
            GenerationParams::default().max_tokens(512).temperature(0.0),
        )
        .await?;

    println!("--- Generated code ---\n");
    println!("{}", completion.content);

    Ok(())
}
