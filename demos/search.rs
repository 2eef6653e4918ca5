//! This example shows:
//! - Creating a dotderpi client from the environment
//! - Searching images
//! - Printing the ID and score of each result

use dotderpi::client::{Client, Config};
use dotderpi::image::ImageSearch;
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    // DERPI_API_KEY is optional here
    let client = Client::from_config(Config::from_env());

    let query = std::env::args().nth(1).unwrap_or_else(|| "safe".to_string());
    let search = ImageSearch::new(&client, &query, None, Some(5)).await?;

    println!("{} images match {query:?}", search.total());
    for image in search.iter() {
        println!("#{:<8} score {:>5}", image.id(), image.score());
    }

    Ok(())
}
