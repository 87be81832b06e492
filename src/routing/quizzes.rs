use {
    rocket::{
        post,
        http::Status,
        serde::json::Json
    },
    crate::models::{
        db::DbConn,
        web::{Success, QuizBody},
        trivia::{self, Turn}
    }
};

#[post("/quizzes", data = "<body>")]
pub async fn play_quiz(body: Json<QuizBody>, conn: DbConn) -> Result<Json<Success<Turn>>, Status> {
    let body = body.into_inner();
    conn.run(move |conn| trivia::play(body, conn))
        .await
        .map(Success::json)
        .map_err(Status::from)
}
