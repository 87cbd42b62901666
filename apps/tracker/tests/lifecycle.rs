//! End-to-end parcel lifecycle against an in-memory store.

use parcel_core::ParcelStatus;
use parcel_db::{Database, DbConfig};
use parcel_tracker::ParcelService;

async fn setup() -> (Database, ParcelService<Vec<u8>>) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let service = ParcelService::with_writer(db.parcels(), Vec::new());
    (db, service)
}

#[tokio::test]
async fn address_and_delete_are_frozen_once_sent() {
    let (db, mut service) = setup().await;

    let parcel = service.register(1, "A").await.unwrap();
    assert_eq!(parcel.status, ParcelStatus::Registered);

    service.change_address(parcel.number, "B").await.unwrap();
    let stored = db.parcels().get(parcel.number).await.unwrap();
    assert_eq!(stored.address, "B");
    assert_eq!(stored.status, ParcelStatus::Registered);

    service.next_status(parcel.number).await.unwrap();
    service.change_address(parcel.number, "C").await.unwrap();
    service.delete(parcel.number).await.unwrap();

    let parcels = db.parcels().get_by_client(1).await.unwrap();
    assert_eq!(parcels.len(), 1);
    assert_eq!(parcels[0].number, parcel.number);
    assert_eq!(parcels[0].address, "B");
    assert_eq!(parcels[0].status, ParcelStatus::Sent);
    assert_eq!(parcels[0].created_at, parcel.created_at);
}

#[tokio::test]
async fn clients_see_only_their_parcels() {
    let (db, mut service) = setup().await;

    let mut mine = Vec::new();
    for address in ["north", "south", "east"] {
        mine.push(service.register(10, address).await.unwrap());
    }
    service.register(11, "west").await.unwrap();

    let mut stored = db.parcels().get_by_client(10).await.unwrap();
    stored.sort_by_key(|p| p.number);
    mine.sort_by_key(|p| p.number);
    assert_eq!(stored, mine);

    assert!(db.parcels().get_by_client(12).await.unwrap().is_empty());
}

#[tokio::test]
async fn report_lists_every_parcel_of_the_client() {
    let (_db, mut service) = setup().await;
    let first = service.register(2, "Oak Ave 1").await.unwrap();
    let second = service.register(2, "Oak Ave 2").await.unwrap();
    service.next_status(second.number).await.unwrap();
    service.next_status(second.number).await.unwrap();

    service.print_client_parcels(2).await.unwrap();

    let out = String::from_utf8(service.into_writer()).unwrap();
    let report = out
        .split_once("Parcels of client 2:\n")
        .map(|(_, report)| report)
        .unwrap();

    assert!(report.contains(&format!(
        "Parcel #{} to address Oak Ave 1 from client 2 registered at {}, status registered\n",
        first.number, first.created_at
    )));
    assert!(report.contains(&format!(
        "Parcel #{} to address Oak Ave 2 from client 2 registered at {}, status delivered\n",
        second.number, second.created_at
    )));
    assert!(report.ends_with("\n\n"));
    assert_eq!(report.lines().count(), 3);
}
