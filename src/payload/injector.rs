use url::Url;

/// Query parameters in source order, keeping only the first value per name.
pub fn query_params(url: &Url) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();

    for (k, v) in url.query_pairs() {
        if params.iter().any(|(name, _)| name.as_str() == k) {
            continue;
        }
        params.push((k.into_owned(), v.into_owned()));
    }

    params
}

/// Append `payload` to the current value of `param`.
///
/// Other pairs keep their order and values. Later duplicates of `param`
/// are dropped so the server sees exactly one, mutated, value.
pub fn append_query_param(base: &Url, param: &str, payload: &str) -> Url {
    let mut url = base.clone();
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut found = false;

    for (k, v) in base.query_pairs() {
        if k == param {
            if found {
                continue;
            }
            found = true;
            pairs.push((k.into_owned(), format!("{}{}", v, payload)));
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }

    if !found {
        pairs.push((param.to_string(), payload.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
    url
}
