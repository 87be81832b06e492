use {
    serde::Serialize,
    rocket::serde::json::Json
};

/// Wraps a payload as `{"success": true, ...payload}`.
#[derive(Serialize, Debug)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T
}

impl <T> Success<T> {
    pub fn json(body: T) -> Json<Success<T>> {
        Json(Success {
            success: true,
            body
        })
    }
}

/// The body every error response carries.
#[derive(Serialize, Debug)]
pub struct Failure {
    success: bool,
    error: u16,
    message: &'static str
}

impl Failure {
    pub fn json(error: u16, message: &'static str) -> Json<Failure> {
        Json(Failure {
            success: false,
            error,
            message
        })
    }
}
