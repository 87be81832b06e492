//! What each endpoint does, independent of how it's reached over HTTP.

use {
    std::collections::BTreeMap,
    serde::Serialize,
    thiserror::Error,
    derive_more::Deref,
    log::{debug, info, warn, error},
    diesel::Connection as _,
    rocket::http::Status,
    crate::models::{
        pagination::paginate,
        web::{Invalid, QuestionBody, SearchBody, QuizBody},
        db::{
            Connection,
            models::{Category, Question, NewQuestion}
        }
    }
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("nothing to return")]
    NotFound,
    #[error("invalid input: {0}")]
    Invalid(#[from] Invalid),
    #[error("store rejected the operation: {0}")]
    Unprocessable(diesel::result::Error),
    #[error("store query failed: {0}")]
    Query(#[from] diesel::result::Error)
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Error::NotFound => Status::NotFound,
            Error::Invalid(_) | Error::Unprocessable(_) => Status::UnprocessableEntity,
            Error::Query(_) => Status::InternalServerError
        }
    }
}

impl From<Error> for Status {
    fn from(e: Error) -> Status {
        match &e {
            Error::NotFound => debug!("{}", e),
            Error::Invalid(_) => warn!("{}", e),
            Error::Unprocessable(_) | Error::Query(_) => error!("{}", e)
        }
        e.status()
    }
}

/// Category ids mapped to their labels, serialized as a JSON object.
#[derive(Serialize, Deref, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<i32, String>);

impl From<Vec<Category>> for CategoryMap {
    fn from(categories: Vec<Category>) -> Self {
        CategoryMap(categories
            .into_iter()
            .map(|cat| (cat.id, cat.kind))
            .collect()
        )
    }
}

#[derive(Serialize, Debug)]
pub struct Categories {
    pub categories: CategoryMap
}

#[derive(Serialize, Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub total_categories: usize
}

#[derive(Serialize, Debug)]
pub struct Created {
    pub created_id: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize
}

#[derive(Serialize, Debug)]
pub struct Deleted {
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize
}

#[derive(Serialize, Debug)]
pub struct Matches {
    pub questions: Vec<Question>,
    pub total_questions: usize
}

#[derive(Serialize, Debug)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String
}

/// `question` is `None` once every admissible question has been played.
#[derive(Serialize, Debug)]
pub struct Turn {
    pub question: Option<Question>
}

pub fn categories(conn: &mut Connection) -> Result<Categories, Error> {
    let categories = Category::load_all(conn)?;
    if categories.is_empty() {
        return Err(Error::NotFound)
    }

    Ok(Categories {
        categories: categories.into()
    })
}

pub fn questions(page: Option<i64>, conn: &mut Connection) -> Result<QuestionPage, Error> {
    let all = Question::load_all(conn)?;
    let categories = CategoryMap::from(Category::load_all(conn)?);

    let total_questions = all.len();
    let questions = paginate(page, all);
    if questions.is_empty() {
        return Err(Error::NotFound)
    }

    Ok(QuestionPage {
        questions,
        total_questions,
        total_categories: categories.len(),
        categories
    })
}

pub fn create(body: QuestionBody, page: Option<i64>, conn: &mut Connection) -> Result<Created, Error> {
    let valid = body.validate()?;

    conn.transaction::<_, Error, _>(|conn| {
        if Category::find(valid.category, conn)?.is_none() {
            return Err(Invalid::UnknownCategory(valid.category).into())
        }

        let created = Question::insert(
            &NewQuestion {
                question: &valid.question,
                answer: &valid.answer,
                category: valid.category,
                difficulty: valid.difficulty
            },
            conn
        ).map_err(Error::Unprocessable)?;
        info!("created question {} in category {}", created.id, created.category);

        let all = Question::load_all(conn)?;
        Ok(Created {
            created_id: created.id,
            total_questions: all.len(),
            questions: paginate(page, all)
        })
    })
}

/// Fails with [`Error::NotFound`] when `id` doesn't exist.
pub fn delete(id: i32, page: Option<i64>, conn: &mut Connection) -> Result<Deleted, Error> {
    conn.transaction::<_, Error, _>(|conn| {
        let question = Question::find(id, conn)?
            .ok_or(Error::NotFound)?;

        Question::delete(question.id, conn)
            .map_err(Error::Unprocessable)?;
        info!("deleted question {}", question.id);

        let all = Question::load_all(conn)?;
        Ok(Deleted {
            deleted: question.id,
            total_questions: all.len(),
            questions: paginate(page, all)
        })
    })
}

/// Only the requested page of matches is returned; `total_questions`
/// counts all of them.
pub fn search(body: SearchBody, page: Option<i64>, conn: &mut Connection) -> Result<Matches, Error> {
    let term = body.term()?;
    let matches = Question::search(&term, conn)?;
    if matches.is_empty() {
        return Err(Error::NotFound)
    }

    Ok(Matches {
        total_questions: matches.len(),
        questions: paginate(page, matches)
    })
}

pub fn in_category(id: i32, page: Option<i64>, conn: &mut Connection) -> Result<CategoryQuestions, Error> {
    let category = Category::find(id, conn)?
        .ok_or(Error::NotFound)?;
    let all = Question::load_in(&category, conn)?;

    Ok(CategoryQuestions {
        total_questions: all.len(),
        questions: paginate(page, all),
        current_category: category.kind
    })
}

pub fn play(body: QuizBody, conn: &mut Connection) -> Result<Turn, Error> {
    let round = body.into_round();
    let pool = Question::load_unseen(&round.previous, round.filter, conn)
        .map_err(Error::Unprocessable)?;

    let question = round
        .draw(pool, &mut rand::thread_rng())
        .into_question();
    if question.is_none() {
        debug!("no question left after {} played", round.previous.len());
    }

    Ok(Turn { question })
}
