use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Route {route:?} has {stops} stop(s), needs at least two")]
    RouteTooShort { route: String, stops: usize },
}
