//! End-to-end service scenario: seed a business, find it, track it on the
//! drop list, move it through the pipeline and drop it again.

mod support;

use localist::config::SearchConfig;
use localist::models::{
    BusinessStatus, DropMethod, DropState, HeadcountRange, NewBusiness, NewDropListItem,
};
use localist::services::{BusinessService, DropListService, SeedService};
use support::{business_fixture, InMemoryBusinessStore};

#[tokio::test]
async fn track_a_business_from_search_to_removal() {
    let businesses = InMemoryBusinessStore::new();
    let business_id = businesses.add(NewBusiness {
        number_of_employees: 12,
        status: Some("Issued".to_string()),
        ..business_fixture("Acme Coffee", "Cafe")
    });

    let search = BusinessService::new(businesses.clone(), &SearchConfig::default());
    let drop_list =
        DropListService::new(support::InMemoryDropListStore::new(), businesses.clone());

    let user = 7;

    // An unfiltered search surfaces the business with its derived fields.
    let results = search.find_businesses(0, 0, None, None).await.unwrap();
    assert_eq!(results.len(), 1);
    let found = &results[0];
    assert_eq!(found.id, business_id);
    assert_eq!(found.headcount_range, HeadcountRange::SixToTwenty);
    assert_eq!(found.status, BusinessStatus::Active);

    // Track it.
    let created = drop_list
        .create(
            user,
            NewDropListItem {
                business_id: found.id,
                status: DropState::ToVisit,
                method: DropMethod::InPerson,
                planned_drop_date: None,
                notes: None,
            },
        )
        .await
        .data
        .expect("created item");

    // Move it through the pipeline in bulk.
    let updated = drop_list
        .bulk_update(user, vec![created.id], vec![DropState::Interviewed])
        .await
        .data
        .expect("bulk-updated items");
    assert_eq!(updated[0].status, DropState::Interviewed);

    // Drop it; the list no longer mentions the business.
    assert_eq!(drop_list.remove(user, created.id).await.status_code, 200);
    let mine = drop_list.list_mine(user).await.data.unwrap();
    assert!(mine.iter().all(|i| i.business_id != found.id));
}

#[tokio::test]
async fn seeding_populates_the_store_searched_by_the_service() {
    let businesses = InMemoryBusinessStore::new();
    let seeder = SeedService::new(businesses.clone());

    let records: Vec<localist::services::LicenceRecord> = serde_json::from_str(
        r#"[
            {
                "businessname": "Acme Holdings Ltd",
                "businesstradename": "Acme Coffee",
                "businesstype": "Cafe",
                "status": "Issued",
                "numberofemployees": 4,
                "localarea": "Downtown"
            },
            {
                "businessname": "Mystery Ventures",
                "businesstype": "Taxidermy",
                "status": "Issued"
            }
        ]"#,
    )
    .unwrap();

    let report = seeder.seed(&records, 100).await.unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.retained, 1);
    assert_eq!(report.skipped_unrecognized, 1);
    assert_eq!(report.inserted, 1);

    let search = BusinessService::new(businesses.clone(), &SearchConfig::default());
    let results = search
        .find_businesses(0, 0, None, Some("downtown"))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Acme Coffee");

    // A second run against the populated store is refused.
    assert!(seeder.seed(&records, 100).await.is_err());

    // Unless the table is cleared first.
    seeder.clear().await.unwrap();
    assert!(seeder.seed(&records, 100).await.is_ok());
}
