use log::debug;
use reqwest::header::{HeaderMap, LINK};
use reqwest::Url;
use std::collections::HashMap;

/// Reads the `rel="next"` target out of a response's `Link` header. A header
/// that cannot be read means there is no next page; it never fails the
/// response it came with.
pub(crate) fn next_page_url(url: &str, headers: &HeaderMap) -> Option<Url> {
    let link_header = headers.get(LINK)?;

    let link_header = match link_header.to_str() {
        Ok(s) => s,
        Err(e) => {
            debug!("ignoring unreadable Link header from {url}: {e}");
            return None;
        }
    };

    let links = parse_link_header(link_header);
    let next = links.get("next")?;

    match next.parse::<Url>() {
        Ok(next_url) => Some(next_url),
        Err(e) => {
            debug!("ignoring malformed next link {next} from {url}: {e}");
            None
        }
    }
}

fn parse_link_header(s: &str) -> HashMap<String, String> {
    fn parse_url_part(s: &str) -> Option<String> {
        s.strip_prefix('<')
            .and_then(|s0| s0.strip_suffix('>'))
            .map(|s1| s1.to_string())
    }

    fn parse_rel_part(s: &str) -> Option<String> {
        s.strip_prefix("rel=\"")
            .and_then(|s0| s0.strip_suffix('"'))
            .map(|s1| s1.to_string())
    }

    s.split(',')
        .filter_map(|part| {
            part.split_once(';').and_then(|(u, r)| {
                parse_url_part(u.trim()).and_then(|u0| parse_rel_part(r.trim()).map(|r0| (r0, u0)))
            })
        })
        .collect::<HashMap<_, _>>()
}
