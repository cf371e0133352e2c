use thiserror::Error;

/// Fatal errors surfaced to the user with a non-zero exit.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Fetch(#[from] stratpack_fetch::FetchError),

    #[error("{0}")]
    Render(#[from] stratpack_core::RenderError),

    #[error("{0}")]
    Pipeline(#[from] stratpack_core::PipelineError),
}
