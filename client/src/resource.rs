extern crate url;

use self::url::Url;
use core::fmt;
use std::ops::Add;

const SEP: char = '/';
const DEFAULT_SCHEME: &str = "https://";

#[derive(Clone, Debug)]
pub struct Resource {
    url: Url,
}

impl Resource {
    #[must_use]
    pub fn new(uri: &str) -> Option<Resource> {
        let base = Url::parse(uri).ok()?;
        Some(Resource { url: base })
    }

    /// Builds base resource for a cluster given either as a bare host name
    /// (or ip) or as a full URI. Bare hosts get the `https` scheme.
    #[must_use]
    pub fn cluster(address: &str) -> Option<Resource> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }
        if address.contains("://") {
            Resource::new(address)
        } else {
            Resource::new(&format!("{DEFAULT_SCHEME}{address}"))
        }
    }

    pub fn append_path(&mut self, path: &str) -> &mut Self {
        if let Some(segments) = self.url.path_segments() {
            let p = segments
                .chain(path.split(SEP))
                .filter(|x| !x.is_empty())
                .fold(String::new(), |s, x| {
                    let mut y = s.add(x);
                    y.push(SEP);
                    y
                });

            let path_to_set = if path.chars().next_back().unwrap_or_default() == SEP {
                &p
            } else {
                &p[..p.len().saturating_sub(1)]
            };
            self.url.set_path(path_to_set);
        } else {
            let r = self.url.join(path);
            if let Ok(u) = r {
                self.url = u;
            }
        }
        self
    }

    /// Replaces query string with the pairs given. Values are kept
    /// verbatim so that field lists like `uuid,volume` stay readable.
    pub fn set_query(&mut self, pairs: &[(&str, &str)]) -> &mut Self {
        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            let query = pairs
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            self.url.set_query(Some(&query));
        }
        self
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
