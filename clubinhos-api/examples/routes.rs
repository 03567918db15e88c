use clubinhos_api::{Client, ClubinhosApiError, Request};

#[tokio::main]
pub async fn main() -> Result<(), ClubinhosApiError> {
    let client = Client::new("http://localhost:3000");

    let routes = client.send(Request::routes().list(), None).await?;
    for route in routes.iter().filter(|r| r.public) {
        println!("/{} -> {} ({})", route.path, route.entity_type, route.id_to_fetch);
    }
    Ok(())
}
