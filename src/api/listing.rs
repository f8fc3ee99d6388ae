use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use pixel_kernels::Command;
use std::sync::Arc;

use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::services::ImageStore;

/// Join items into the pipe-prefixed list format (`|a|b|c`).
pub fn pipe_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().fold(String::new(), |mut acc, item| {
        acc.push('|');
        acc.push_str(item.as_ref());
        acc
    })
}

/// List the images that can be processed
///
/// Plain text, each name prefixed with `|`.
#[utoipa::path(
    get,
    path = "/getFileList",
    responses(
        (status = 200, description = "Pipe-separated image names", body = String, content_type = "text/plain"),
        (status = 500, description = "Image directory unreadable"),
    ),
    tag = "Listing"
)]
pub async fn handle_file_list(
    State(images): State<Arc<dyn ImageStore>>,
) -> Result<Response, ApiError> {
    let names = images.list().await?;
    Ok(plain_text(pipe_list(names)))
}

/// List the available commands
///
/// Plain text, each command prefixed with `|`.
#[utoipa::path(
    get,
    path = "/getCommandList",
    responses(
        (status = 200, description = "Pipe-separated command names", body = String, content_type = "text/plain"),
    ),
    tag = "Listing"
)]
pub async fn handle_command_list() -> Response {
    plain_text(pipe_list(Command::ALL.iter().map(|c| c.name())))
}

/// Serve `index.html` from the image directory, or the built-in page.
pub async fn handle_index(State(images): State<Arc<dyn ImageStore>>) -> Response {
    match images.read("index.html").await {
        Ok(bytes) => Html(bytes).into_response(),
        Err(_) => Html(AssetLoader::default_index().into_owned()).into_response(),
    }
}

fn plain_text(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_list() {
        assert_eq!(pipe_list(["a.png", "b.jpg"]), "|a.png|b.jpg");
        assert_eq!(pipe_list(Vec::<String>::new()), "");
    }

    #[test]
    fn test_command_list_order() {
        let list = pipe_list(Command::ALL.iter().map(|c| c.name()));
        assert_eq!(
            list,
            "|edges|histograms|opaqueshadow|reduceColor|grayscale|monochrome|negateImage|horizontalflip|rotate"
        );
    }
}
