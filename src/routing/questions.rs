use {
    rocket::{
        get,
        post,
        delete,
        http::Status,
        serde::json::Json
    },
    crate::models::{
        db::DbConn,
        web::{Success, QuestionBody, SearchBody},
        trivia::{self, QuestionPage, Created, Deleted, Matches}
    }
};

#[get("/questions?<page>")]
pub async fn list_questions(page: Option<i64>, conn: DbConn) -> Result<Json<Success<QuestionPage>>, Status> {
    conn.run(move |conn| trivia::questions(page, conn))
        .await
        .map(Success::json)
        .map_err(Status::from)
}

#[post("/questions?<page>", data = "<body>")]
pub async fn create_question(page: Option<i64>, body: Json<QuestionBody>, conn: DbConn) -> Result<Json<Success<Created>>, Status> {
    let body = body.into_inner();
    conn.run(move |conn| trivia::create(body, page, conn))
        .await
        .map(Success::json)
        .map_err(Status::from)
}

/// Deleting a question that doesn't exist is unprocessable rather than
/// not found.
#[delete("/questions/<id>?<page>")]
pub async fn delete_question(id: i32, page: Option<i64>, conn: DbConn) -> Result<Json<Success<Deleted>>, Status> {
    conn.run(move |conn| trivia::delete(id, page, conn))
        .await
        .map(Success::json)
        .map_err(|e| match e {
            trivia::Error::NotFound => {
                log::warn!("cannot delete question {}: no such question", id);
                Status::UnprocessableEntity
            },
            e => e.into()
        })
}

#[post("/questions/search?<page>", data = "<body>")]
pub async fn search_questions(page: Option<i64>, body: Json<SearchBody>, conn: DbConn) -> Result<Json<Success<Matches>>, Status> {
    let body = body.into_inner();
    conn.run(move |conn| trivia::search(body, page, conn))
        .await
        .map(Success::json)
        .map_err(Status::from)
}
