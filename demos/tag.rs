//! This example shows:
//! - Fetching a tag by its slug
//! - Printing what it implies

use dotderpi::tag::Tag;
use dotderpi::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Debug)?;

    let client = Client::new();
    let tag = Tag::new(&client, "twilight+sparkle").await?;

    println!("{} ({:?}): {} images", tag.name(), tag.category(), tag.images());
    match tag.implied_tags() {
        [] => println!("implies nothing"),
        implied => println!("implies: {}", implied.join(", ")),
    }

    Ok(())
}
