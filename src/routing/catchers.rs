use {
    rocket::{
        catch,
        Request,
        http::Status,
        serde::json::Json
    },
    crate::models::web::Failure
};

#[catch(400)]
pub fn bad_request() -> Json<Failure> {
    Failure::json(400, "Bad Request")
}

#[catch(404)]
pub fn not_found() -> Json<Failure> {
    Failure::json(404, "Not Found")
}

#[catch(405)]
pub fn method_not_allowed() -> Json<Failure> {
    Failure::json(405, "Method not allowed")
}

#[catch(422)]
pub fn unprocessable() -> Json<Failure> {
    Failure::json(422, "Unprocessable")
}

#[catch(500)]
pub fn server_error() -> Json<Failure> {
    Failure::json(500, "Internal Server Error")
}

#[catch(default)]
pub fn any_other(status: Status, _req: &Request) -> Json<Failure> {
    Failure::json(status.code, status.reason().unwrap_or("Unknown Error"))
}
