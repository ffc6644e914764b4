//! Year-partitioned team roster
//!
//! The latest year shows office bearers and the core committee as separate
//! groups; earlier years show one merged list. Faculty are listed on their
//! own and never appear in a year roster.

use shared::models::TeamMember;
use store_client::{StoreResult, TableStore};

use super::fetch::{FetchController, Ticket};
use super::placeholder;
use crate::db::team;

/// The fixed set of years offered as tabs, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamYears {
    years: Vec<i32>,
    latest: i32,
    selected: i32,
}

impl TeamYears {
    /// `None` when no years are given; starts on the latest year
    pub fn new(years: impl IntoIterator<Item = i32>) -> Option<Self> {
        let mut years: Vec<i32> = years.into_iter().collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        let latest = *years.first()?;
        Some(Self {
            years,
            latest,
            selected: latest,
        })
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn selected(&self) -> i32 {
        self.selected
    }

    pub fn latest(&self) -> i32 {
        self.latest
    }

    pub fn is_latest_year(&self) -> bool {
        self.selected == self.latest
    }

    /// Switch tabs; returns whether the roster must be fetched again
    pub fn select(&mut self, year: i32) -> bool {
        if year == self.selected || !self.years.contains(&year) {
            return false;
        }
        self.selected = year;
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterLayout {
    Split {
        office_bearers: Vec<TeamMember>,
        core_committee: Vec<TeamMember>,
    },
    Merged(Vec<TeamMember>),
}

pub fn roster_layout(
    is_latest: bool,
    office_bearers: Vec<TeamMember>,
    core_committee: Vec<TeamMember>,
) -> RosterLayout {
    if is_latest {
        RosterLayout::Split {
            office_bearers,
            core_committee,
        }
    } else {
        let mut merged = office_bearers;
        merged.extend(core_committee);
        RosterLayout::Merged(merged)
    }
}

pub fn badge_label(year: i32, is_latest: bool) -> String {
    if is_latest {
        "Current Team".to_string()
    } else {
        format!("Team of {year}")
    }
}

/// Team section
#[derive(Debug)]
pub struct TeamView {
    years: TeamYears,
    roster: FetchController<TeamMember>,
    faculty: FetchController<TeamMember>,
}

impl TeamView {
    pub fn new(years: TeamYears) -> Self {
        Self {
            years,
            roster: FetchController::new("team.roster", placeholder::TEAM, &placeholder::TEAM_EMPTY),
            faculty: FetchController::new("team.faculty", placeholder::TEAM, &placeholder::TEAM_EMPTY),
        }
    }

    pub fn years(&self) -> &TeamYears {
        &self.years
    }

    pub fn roster(&self) -> &FetchController<TeamMember> {
        &self.roster
    }

    pub fn faculty(&self) -> &FetchController<TeamMember> {
        &self.faculty
    }

    pub fn badge(&self) -> String {
        badge_label(self.years.selected(), self.years.is_latest_year())
    }

    /// Select a year tab; a ticket is issued only when a fetch is needed
    pub fn select_year(&mut self, year: i32) -> Option<Ticket> {
        self.years.select(year).then(|| self.roster.begin())
    }

    /// Office bearers then core committee for `year`, fetched concurrently
    pub async fn load_roster(store: &dyn TableStore, year: i32) -> StoreResult<Vec<TeamMember>> {
        let (office_bearers, core_committee) = futures::try_join!(
            team::office_bearers(store, Some(year)),
            team::core_committee(store, Some(year)),
        )?;
        Ok(office_bearers.into_iter().chain(core_committee).collect())
    }

    pub fn commit_roster(&mut self, ticket: Ticket, result: StoreResult<Vec<TeamMember>>) -> bool {
        self.roster.commit(ticket, result)
    }

    /// Load the selected year's roster and the faculty list
    pub async fn refresh(&mut self, store: &dyn TableStore) {
        let roster_ticket = self.roster.begin();
        let faculty_ticket = self.faculty.begin();
        let year = self.years.selected();
        let (roster, faculty) = tokio::join!(Self::load_roster(store, year), team::faculty(store));
        self.roster.commit(roster_ticket, roster);
        self.faculty.commit(faculty_ticket, faculty);
    }

    /// Select a year and load it; returns whether anything changed
    pub async fn change_year(&mut self, store: &dyn TableStore, year: i32) -> bool {
        let Some(ticket) = self.select_year(year) else {
            return false;
        };
        let roster = Self::load_roster(store, self.years.selected()).await;
        self.roster.commit(ticket, roster)
    }

    /// Roster grouped for display, once loaded and non-empty
    pub fn layout(&self) -> Option<RosterLayout> {
        let members = self.roster.items();
        if members.is_empty() {
            return None;
        }
        let (office_bearers, core_committee): (Vec<_>, Vec<_>) = members
            .iter()
            .filter(|m| !m.is_faculty)
            .cloned()
            .partition(|m| m.is_office_bearer);
        Some(roster_layout(
            self.years.is_latest_year(),
            office_bearers,
            core_committee,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::member;
    use shared::Record;
    use store_client::MemoryStore;

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store.seed_rows(
            TeamMember::TABLE,
            vec![
                member("pres25", Some(1), true, false, Some(2025)),
                member("cc25", Some(4), false, false, Some(2025)),
                member("pres24", Some(1), true, false, Some(2024)),
                member("cc24", Some(2), false, false, Some(2024)),
                member("pres23", Some(1), true, false, Some(2023)),
                member("prof", Some(1), false, true, None),
            ],
        );
        store
    }

    fn ids(members: &[TeamMember]) -> Vec<&str> {
        members.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_years_start_on_latest() {
        let years = TeamYears::new([2023, 2025, 2024, 2025]).unwrap();
        assert_eq!(years.years(), &[2025, 2024, 2023]);
        assert_eq!(years.selected(), 2025);
        assert!(years.is_latest_year());
        assert!(TeamYears::new([]).is_none());
    }

    #[test]
    fn test_select_only_known_and_different_years() {
        let mut years = TeamYears::new([2024, 2025]).unwrap();
        assert!(!years.select(2025));
        assert!(!years.select(2019));
        assert!(years.select(2024));
        assert!(!years.is_latest_year());
    }

    #[test]
    fn test_badge() {
        assert_eq!(badge_label(2025, true), "Current Team");
        assert_eq!(badge_label(2023, false), "Team of 2023");
    }

    #[tokio::test]
    async fn test_latest_year_is_split() {
        let store = seeded();
        let mut view = TeamView::new(TeamYears::new([2023, 2024, 2025]).unwrap());
        view.refresh(&store).await;

        match view.layout().unwrap() {
            RosterLayout::Split {
                office_bearers,
                core_committee,
            } => {
                assert_eq!(ids(&office_bearers), vec!["pres25"]);
                assert_eq!(ids(&core_committee), vec!["cc25"]);
            }
            other => panic!("expected split layout, got {other:?}"),
        }
        assert_eq!(ids(view.faculty().items()), vec!["prof"]);
        assert_eq!(view.badge(), "Current Team");
    }

    #[tokio::test]
    async fn test_earlier_year_is_merged_without_faculty() {
        let store = seeded();
        let mut view = TeamView::new(TeamYears::new([2023, 2024, 2025]).unwrap());
        view.refresh(&store).await;
        assert!(view.change_year(&store, 2024).await);

        assert_eq!(
            view.layout(),
            Some(RosterLayout::Merged(
                view.roster().items().to_vec()
            ))
        );
        assert_eq!(ids(view.roster().items()), vec!["pres24", "cc24"]);
        assert_eq!(view.badge(), "Team of 2024");
    }

    #[tokio::test]
    async fn test_reselecting_same_year_does_not_fetch() {
        let store = seeded();
        let mut view = TeamView::new(TeamYears::new([2024, 2025]).unwrap());
        view.refresh(&store).await;
        let calls = store.call_count();
        assert!(!view.change_year(&store, 2025).await);
        assert_eq!(store.call_count(), calls);
    }

    #[tokio::test]
    async fn test_late_response_for_old_year_is_dropped() {
        let store = seeded();
        let mut view = TeamView::new(TeamYears::new([2023, 2024, 2025]).unwrap());

        let t2024 = view.select_year(2024).unwrap();
        let t2023 = view.select_year(2023).unwrap();

        let r2023 = TeamView::load_roster(&store, 2023).await;
        assert!(view.commit_roster(t2023, r2023));
        let r2024 = TeamView::load_roster(&store, 2024).await;
        assert!(!view.commit_roster(t2024, r2024));

        assert_eq!(ids(view.roster().items()), vec!["pres23"]);
    }
}
