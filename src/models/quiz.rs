use {
    rand::{Rng, seq::SliceRandom},
    crate::models::db::models::Question
};

/// Which questions a quiz round draws from. Category id 0 means any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Only(i32)
}

impl From<i32> for CategoryFilter {
    fn from(id: i32) -> Self {
        match id {
            0 => CategoryFilter::Any,
            id => CategoryFilter::Only(id)
        }
    }
}

impl CategoryFilter {
    pub fn admits(self, question: &Question) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(id) => question.category == id
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Draw {
    Question(Question),
    Exhausted
}

impl Draw {
    pub fn into_question(self) -> Option<Question> {
        match self {
            Draw::Question(q) => Some(q),
            Draw::Exhausted => None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    pub previous: Vec<i32>,
    pub filter: CategoryFilter
}

impl Round {
    pub fn new(previous: Vec<i32>, filter: CategoryFilter) -> Round {
        Round { previous, filter }
    }

    pub fn admits(&self, question: &Question) -> bool {
        !self.previous.contains(&question.id) && self.filter.admits(question)
    }

    /// Picks uniformly among the admissible questions of `pool`.
    pub fn draw<R: Rng + ?Sized>(&self, pool: Vec<Question>, rng: &mut R) -> Draw {
        let candidates = pool
            .into_iter()
            .filter(|q| self.admits(q))
            .collect::<Vec<_>>();

        candidates
            .choose(rng)
            .cloned()
            .map(Draw::Question)
            .unwrap_or(Draw::Exhausted)
    }
}
