//! # Query Recipe Demo
//!
//! Seeds two teams and five members, then runs a few searches:
//! 1.  Criteria with a team and an age range.
//! 2.  Two pages of an unfiltered search, the second with its total implied by the window.
//! 3.  A request-style search sorted by team name, descending.

use query_recipe::lifecycle::{setup_tracing, MemberSystem};
use query_recipe::model::{MemberCreate, MemberSearch, TeamCreate};
use query_recipe::query::PageParams;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting application with member search");

    let system = MemberSystem::new();

    let span = tracing::info_span!("seeding");
    async {
        let team_a = system
            .team_client
            .create_team(TeamCreate::new("TeamA"))
            .await
            .map_err(|e| e.to_string())?;
        let team_b = system
            .team_client
            .create_team(TeamCreate::new("TeamB"))
            .await
            .map_err(|e| e.to_string())?;

        let members = [
            MemberCreate::new("MemberA", 20).in_team(team_a),
            MemberCreate::new("MemberB", 30).in_team(team_a),
            MemberCreate::new("MemberC", 40).in_team(team_b),
            MemberCreate::new("MemberD", 50).in_team(team_b),
            MemberCreate::anonymous(90),
        ];
        for params in members {
            system
                .member_client
                .create_member(params)
                .await
                .map_err(|e| e.to_string())?;
        }
        info!("Seeded 2 teams and 5 members");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let criteria = MemberSearch::default().team_name("TeamB").age_goe(30).age_loe(40);
    let page = system
        .repository
        .search(&criteria, 0, 20)
        .await
        .map_err(|e| e.to_string())?;
    info!(?criteria, total = page.total, "Criteria search");
    print_json(&page)?;

    for offset in [0, 3] {
        let page = system
            .repository
            .search(&MemberSearch::default(), offset, 3)
            .await
            .map_err(|e| e.to_string())?;
        info!(offset, rows = page.len(), total = page.total, "Unfiltered page");
    }

    let params = PageParams {
        page: Some(0),
        size: Some(10),
        sort: vec!["teamName,desc".to_string(), "age,asc".to_string()],
    };
    let page = system
        .search_with_params(&MemberSearch::default(), &params)
        .await
        .map_err(|e| e.to_string())?;
    print_json(&page)?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
