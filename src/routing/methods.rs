//! Rocket answers an unsupported verb on a known path with 404. These
//! fallback routes turn that into 405.

use rocket::{
    Data,
    Request,
    Route,
    http::{Method, Status},
    route::{self, BoxFuture}
};

static VERBS: [Method; 5] = [Method::Get, Method::Post, Method::Put, Method::Delete, Method::Patch];

const SUPPORTED: &[(&str, &[Method])] = &[
    ("/categories", &[Method::Get]),
    ("/categories/<id>/questions", &[Method::Get]),
    ("/questions", &[Method::Get, Method::Post]),
    ("/questions/search", &[Method::Post]),
    ("/questions/<id>", &[Method::Delete]),
    ("/quizzes", &[Method::Post])
];

// Each path gets its own rank so that e.g. `/questions/search` and
// `/questions/<id>` don't collide.
const BASE_RANK: isize = 100;

pub fn fallbacks() -> Vec<Route> {
    SUPPORTED
        .iter()
        .enumerate()
        .flat_map(|(i, &(path, supported))| VERBS
            .iter()
            .copied()
            .filter(move |verb| !supported.contains(verb))
            .map(move |verb| Route::ranked(BASE_RANK + i as isize, verb, path, not_allowed))
        )
        .collect()
}

fn not_allowed<'r>(req: &'r Request<'_>, _data: Data<'r>) -> BoxFuture<'r> {
    route::Outcome::from(req, Status::MethodNotAllowed).pin()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_fallback_for_supported_verbs() {
        let routes = fallbacks();

        assert!(routes.iter().all(|route| !SUPPORTED
            .iter()
            .any(|&(path, supported)| route.uri.path().to_string() == path && supported.contains(&route.method))
        ));
        assert_eq!(
            routes.len(),
            SUPPORTED.len() * VERBS.len() - SUPPORTED.iter().map(|(_, s)| s.len()).sum::<usize>()
        );
    }
}
