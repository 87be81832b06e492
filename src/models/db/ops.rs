use {
    diesel::{
        insert_into,
        delete,
        prelude::*,
        sqlite::Sqlite,
        result::QueryResult
    },
    crate::models::{
        quiz::CategoryFilter,
        db::{
            Connection,
            schema::{categories, questions},
            models::{Question, NewQuestion, Category}
        }
    }
};

impl Category {
    pub fn load_all(conn: &mut Connection) -> QueryResult<Vec<Category>> {
        categories::table
            .order(categories::id)
            .load(conn)
    }

    pub fn find(id: i32, conn: &mut Connection) -> QueryResult<Option<Category>> {
        categories::table
            .find(id)
            .first(conn)
            .optional()
    }
}

impl Question {
    pub fn insert(new: &NewQuestion, conn: &mut Connection) -> QueryResult<Question> {
        insert_into(questions::table)
            .values(new)
            .get_result(conn)
    }

    pub fn find(id: i32, conn: &mut Connection) -> QueryResult<Option<Question>> {
        questions::table
            .find(id)
            .first(conn)
            .optional()
    }

    /// Returns the number of deleted rows.
    pub fn delete(id: i32, conn: &mut Connection) -> QueryResult<usize> {
        delete(questions::table.find(id))
            .execute(conn)
    }

    pub fn load_all(conn: &mut Connection) -> QueryResult<Vec<Question>> {
        questions::table
            .order(questions::id)
            .load(conn)
    }

    pub fn load_in(category: &Category, conn: &mut Connection) -> QueryResult<Vec<Question>> {
        Question::belonging_to(category)
            .order(questions::id)
            .load(conn)
    }

    /// Case-insensitive substring match on the question text, ordered by id.
    // SQLite's LIKE and lower() only fold ASCII, so matching happens here.
    pub fn search(term: &str, conn: &mut Connection) -> QueryResult<Vec<Question>> {
        let needle = term.to_lowercase();
        Question::load_all(conn).map(|all| all
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect()
        )
    }

    pub fn load_unseen(previous: &[i32], filter: CategoryFilter, conn: &mut Connection) -> QueryResult<Vec<Question>> {
        let mut query: questions::BoxedQuery<Sqlite> = questions::table
            .filter(questions::id.ne_all(previous.to_vec()))
            .order(questions::id)
            .into_boxed();

        if let CategoryFilter::Only(category) = filter {
            query = query.filter(questions::category.eq(category));
        }

        query.load(conn)
    }
}
