//! This example shows:
//! - Fetching the featured image
//! - Handling the error instead of bailing out

use dotderpi::image::Image;
use dotderpi::Client;

#[tokio::main]
async fn main() {
    let client = Client::new();

    match Image::featured(&client).await {
        Ok(image) => {
            println!("Featured: #{} by {}", image.id(), image.uploader().unwrap_or("anonymous"));
            if let Some(full) = image.representations().get("full") {
                println!("{full}");
            }
        }
        Err(err) => eprintln!("could not fetch the featured image: {err}"),
    }
}
