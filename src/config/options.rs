// src/config/options.rs

/// Membership filter for the player list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClubFilter {
    #[default]
    All,
    InClub,
    NotInClub,
}

impl ClubFilter {
    /// Query value for the `in_club` parameter; `None` means the parameter
    /// is omitted entirely (the service treats absence as "all").
    pub fn param(&self) -> Option<&'static str> {
        match self {
            ClubFilter::All => None,
            ClubFilter::InClub => Some("in_club"),
            ClubFilter::NotInClub => Some("not_in_club"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClubFilter::All => "All",
            ClubFilter::InClub => "In club",
            ClubFilter::NotInClub => "Not in club",
        }
    }
}

/// Sort direction over base-card rating. Sorting happens server-side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn param(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDir::Asc => "Low → high",
            SortDir::Desc => "High → low",
        }
    }
}

/// Search/filter/sort tuple for the list view. Held by the list controller
/// and carried across a detail-view round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search: String,
    pub filter: ClubFilter,
    pub sort: SortDir,
}

impl Criteria {
    /// Query pairs for GET /players. Parameters equal to their default are
    /// omitted rather than sent explicitly; `sort` is always sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", s!(search)));
        }
        if let Some(v) = self.filter.param() {
            pairs.push(("in_club", s!(v)));
        }
        pairs.push(("sort", s!(self.sort.param())));
        pairs
    }
}
