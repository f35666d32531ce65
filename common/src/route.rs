//! Typed client-side routes.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
    Catalog,
    /// `/documentos?model=ID`; `None` when the query is missing.
    Documents { model: Option<String> },
    /// `/studio?doc=ID`
    Studio { doc: Option<String> },
    Profile,
    Updates,
    /// `/guia` help center.
    Guide,
    NotFound,
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            let v = v.replace('+', " ");
            urlencoding::decode(&v)
                .map(Cow::into_owned)
                .unwrap_or(v)
        })
        .filter(|v| !v.is_empty())
}

impl Route {
    /// Parses a location pathname and its search string (with or without `?`).
    pub fn parse(path: &str, query: &str) -> Route {
        let path = path.trim_end_matches('/');
        match path {
            "" => Route::Landing,
            "/home" => Route::Dashboard,
            "/modelos" => Route::Catalog,
            "/documentos" => Route::Documents {
                model: query_param(query, "model"),
            },
            "/studio" => Route::Studio {
                doc: query_param(query, "doc"),
            },
            "/perfil" => Route::Profile,
            "/atualizacoes" => Route::Updates,
            "/guia" => Route::Guide,
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Dashboard => "/home".to_string(),
            Route::Catalog => "/modelos".to_string(),
            Route::Documents { model: Some(id) } => {
                format!("/documentos?model={}", urlencoding::encode(id))
            }
            Route::Documents { model: None } => "/documentos".to_string(),
            Route::Studio { doc: Some(id) } => format!("/studio?doc={}", urlencoding::encode(id)),
            Route::Studio { doc: None } => "/studio".to_string(),
            Route::Profile => "/perfil".to_string(),
            Route::Updates => "/atualizacoes".to_string(),
            Route::Guide => "/guia".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/", ""), Route::Landing);
        assert_eq!(Route::parse("/home", ""), Route::Dashboard);
        assert_eq!(Route::parse("/modelos/", ""), Route::Catalog);
        assert_eq!(Route::parse("/perfil", ""), Route::Profile);
        assert_eq!(Route::parse("/atualizacoes", ""), Route::Updates);
        assert_eq!(Route::parse("/guia/", ""), Route::Guide);
        assert_eq!(Route::parse("/admin", ""), Route::NotFound);
    }

    #[test]
    fn test_parse_query_is_decoded() {
        assert_eq!(
            Route::parse("/documentos", "?model=1"),
            Route::Documents { model: Some("1".into()) }
        );
        assert_eq!(
            Route::parse("/studio", "foo=bar&doc=doc%201"),
            Route::Studio { doc: Some("doc 1".into()) }
        );
        assert_eq!(Route::parse("/studio", "doc="), Route::Studio { doc: None });
        assert_eq!(Route::parse("/documentos", ""), Route::Documents { model: None });
    }

    #[test]
    fn test_href_parses_back() {
        let routes = [
            Route::Landing,
            Route::Catalog,
            Route::Documents { model: Some("3".into()) },
            Route::Studio { doc: Some("a b".into()) },
            Route::Studio { doc: None },
            Route::Guide,
        ];
        for route in routes {
            let href = route.href();
            let (path, query) = href.split_once('?').unwrap_or((href.as_str(), ""));
            assert_eq!(Route::parse(path, query), route);
        }
    }
}
