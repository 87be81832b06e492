use {
    rocket::{
        get,
        http::Status,
        serde::json::Json
    },
    crate::models::{
        db::DbConn,
        web::Success,
        trivia::{self, Categories, CategoryQuestions}
    }
};

#[get("/categories")]
pub async fn list_categories(conn: DbConn) -> Result<Json<Success<Categories>>, Status> {
    conn.run(trivia::categories)
        .await
        .map(Success::json)
        .map_err(Status::from)
}

#[get("/categories/<id>/questions?<page>")]
pub async fn questions_in_category(id: i32, page: Option<i64>, conn: DbConn) -> Result<Json<Success<CategoryQuestions>>, Status> {
    conn.run(move |conn| trivia::in_category(id, page, conn))
        .await
        .map(Success::json)
        .map_err(Status::from)
}

#[cfg(test)]
mod test {
    use {
        serde_json::{json, Value},
        diesel::{delete, RunQueryDsl},
        rocket::http::Status,
        crate::{
            test::Server,
            models::db::schema::categories
        }
    };

    #[test]
    fn lists_seeded_categories() {
        let server = Server::start();
        let response = server.client.get("/categories").dispatch();

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_json::<Value>(), Some(json!({
            "success": true,
            "categories": {
                "1": "Science",
                "2": "Art",
                "3": "Geography",
                "4": "History",
                "5": "Entertainment",
                "6": "Sports"
            }
        })));
    }

    #[test]
    fn no_categories_is_not_found() {
        let server = Server::start();
        delete(categories::table)
            .execute(&mut server.db())
            .expect("clear categories");

        let response = server.client.get("/categories").dispatch();

        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.into_json::<Value>(), Some(json!({
            "success": false,
            "error": 404,
            "message": "Not Found"
        })));
    }

    #[test]
    fn repeated_listing_is_stable() {
        let server = Server::start();
        let first = server.client.get("/categories").dispatch().into_string();
        let second = server.client.get("/categories").dispatch().into_string();

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn only_questions_of_the_category() {
        let server = Server::start();
        // 30 questions over 6 categories, 5 each
        server.seed_questions(30);

        let response = server.client.get("/categories/1/questions").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body = response.into_json::<Value>().expect("json body");
        assert_eq!(body["success"], true);
        assert_eq!(body["current_category"], "Science");
        assert_eq!(body["total_questions"], 5);

        let questions = body["questions"].as_array().expect("questions");
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q["category"] == 1));

        let ids = questions
            .iter()
            .map(|q| q["id"].as_i64().expect("id"))
            .collect::<Vec<_>>();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn total_counts_every_match_not_just_the_page() {
        let server = Server::start();
        server.seed_questions(72);

        let body = server.client
            .get("/categories/2/questions?page=2")
            .dispatch()
            .into_json::<Value>()
            .expect("json body");

        assert_eq!(body["total_questions"], 12);
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn empty_category_is_still_success() {
        let server = Server::start();
        let body = server.client
            .get("/categories/4/questions")
            .dispatch()
            .into_json::<Value>()
            .expect("json body");

        assert_eq!(body, json!({
            "success": true,
            "questions": [],
            "total_questions": 0,
            "current_category": "History"
        }));
    }

    #[test]
    fn unknown_category_is_not_found() {
        let server = Server::start();
        let response = server.client.get("/categories/8/questions").dispatch();

        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.into_json::<Value>().map(|body| body["error"].clone()), Some(json!(404)));
    }

    #[test]
    fn writes_are_not_allowed() {
        let server = Server::start();
        let response = server.client.post("/categories").dispatch();

        assert_eq!(response.status(), Status::MethodNotAllowed);
        assert_eq!(response.into_json::<Value>(), Some(json!({
            "success": false,
            "error": 405,
            "message": "Method not allowed"
        })));
    }
}
