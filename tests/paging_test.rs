use query_recipe::lifecycle::MemberSystem;
use query_recipe::model::{MemberCreate, MemberSearch, TeamCreate};
use query_recipe::query::{PageRequest, Sort};
use query_recipe::query::path::member;

async fn system_with_members(count: i32) -> MemberSystem {
    let system = MemberSystem::new();
    let team_id = system
        .team_client
        .create_team(TeamCreate::new("TeamA"))
        .await
        .expect("Failed to create team");
    for i in 0..count {
        let params = MemberCreate::new(format!("member{}", i), i);
        let params = if i % 2 == 0 { params.in_team(team_id) } else { params };
        system
            .member_client
            .create_member(params)
            .await
            .expect("Failed to create member");
    }
    system
}

#[tokio::test]
async fn test_first_full_page_reports_total() {
    let system = system_with_members(4).await;

    let page = system
        .repository
        .search(&MemberSearch::default(), 0, 3)
        .await
        .expect("Search failed");

    assert_eq!(page.content.len(), 3);
    assert_eq!(page.total, 4);
    assert_eq!(page.total_pages(), 2);
    assert!(page.is_first());
    assert!(page.has_next());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_short_last_page_reports_total() {
    let system = system_with_members(4).await;

    let page = system
        .repository
        .search(&MemberSearch::default(), 3, 3)
        .await
        .expect("Search failed");

    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].username.as_deref(), Some("member3"));
    assert_eq!(page.total, 4);
    assert!(page.is_last());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_offset_past_the_end_is_empty_with_true_total() {
    let system = system_with_members(4).await;

    let page = system
        .repository
        .search(&MemberSearch::default(), 8, 3)
        .await
        .expect("Search failed");

    assert!(page.is_empty());
    assert_eq!(page.total, 4);

    system.shutdown().await.expect("Shutdown failed");
}

/// Every window, with and without count elision, reports the same page.
#[tokio::test]
async fn test_elided_and_counted_pages_agree() {
    let system = system_with_members(7).await;
    let criteria = [
        MemberSearch::default(),
        MemberSearch::default().team_name("TeamA"),
        MemberSearch::default().age_goe(2).age_loe(5),
    ];

    for criteria in &criteria {
        for offset in 0..9 {
            for limit in 1..9 {
                let request = PageRequest::new(offset, limit)
                    .expect("Invalid page")
                    .with_sort(Sort::by(member::age().desc()));
                let elided = system
                    .repository
                    .search_page_complex(criteria, &request)
                    .await
                    .expect("Search failed");
                let counted = system
                    .repository
                    .search_page_simple(criteria, &request)
                    .await
                    .expect("Search failed");
                assert_eq!(elided, counted, "{:?} offset={} limit={}", criteria, offset, limit);
            }
        }
    }

    system.shutdown().await.expect("Shutdown failed");
}
