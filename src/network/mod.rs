pub mod routes;
pub mod server;

pub use routes::{AnalyzeResponse, AppState};
pub use server::{router, Server};
