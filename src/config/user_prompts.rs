//! User prompts for first-time configuration setup

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the match API domain and returns the trimmed input.
///
/// # Example
/// ```no_run
/// use kbo_schedule::config::user_prompts::prompt_for_api_domain;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api_domain = prompt_for_api_domain().await?;
/// println!("Got API domain: {}", api_domain);
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_api_domain() -> Result<String, AppError> {
    println!("Please enter the match API domain (e.g. https://kbo.example.com): ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
