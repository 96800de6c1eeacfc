//! Function behind `GET /posts` and `POST /posts`.

use lambda_http::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let posts = posts_lambda::init().await?;
    let posts = &posts;

    run(service_fn(move |req| posts_lambda::handle_collection(posts, req))).await
}
