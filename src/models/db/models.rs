use {
    serde::Serialize,
    diesel::{Identifiable, Queryable, Associations, Insertable},
    super::schema::{questions, categories}
};

#[derive(Identifiable, Queryable, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct Category {
    pub id: i32,
    pub kind: String
}

/// A stored question. Its serialized form is what clients receive.
#[derive(Identifiable, Queryable, Associations, Serialize, PartialEq, Eq, Debug, Clone)]
#[diesel(belongs_to(Category, foreign_key = category))]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32
}

#[derive(Insertable, Debug)]
#[diesel(table_name = questions)]
pub struct NewQuestion<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: i32,
    pub difficulty: i32
}
