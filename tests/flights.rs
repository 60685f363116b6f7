use waypoint::{can_reach, Airport};

#[test]
fn can_reach_self_and_null_policy() {
    let sea = Airport::new("SEA");

    assert!(can_reach(&sea, &sea));
    assert!(!can_reach(None, &sea));
    assert!(!can_reach(&sea, None));
    assert!(!can_reach::<Airport>(None, None));
}

#[test]
fn can_reach_through_connections() {
    let sea = Airport::new("SEA");
    let den = Airport::new("DEN");
    let atl = Airport::new("ATL");
    sea.add_flight(&den);
    den.add_flight(&atl);

    assert!(can_reach(&sea, &atl));
    assert!(can_reach(&den, &atl));
    // Flights are directed.
    assert!(!can_reach(&atl, &sea));
}

#[test]
fn can_reach_terminates_with_cycles_and_no_path() {
    let lax = Airport::new("LAX");
    let phx = Airport::new("PHX");
    let las = Airport::new("LAS");
    let hnl = Airport::new("HNL");
    lax.add_flight(&phx);
    phx.add_flight(&las);
    las.add_flight(&lax);
    las.add_flight(&las);
    hnl.add_flight(&lax);

    assert!(!can_reach(&lax, &hnl));
    assert!(can_reach(&hnl, &las));
}

#[test]
fn can_reach_compares_identity_not_code() {
    let ord = Airport::new("ORD");
    let mdw = Airport::new("MDW");
    let ord_twin = Airport::new("ORD");
    ord.add_flight(&mdw);

    assert!(!can_reach(&ord, &ord_twin));
    assert!(!can_reach(&mdw, &ord));
}

#[test]
fn can_reach_after_cancellation() {
    let bos = Airport::new("BOS");
    let jfk = Airport::new("JFK");
    let iad = Airport::new("IAD");
    bos.add_flight(&jfk);
    jfk.add_flight(&iad);
    assert!(can_reach(&bos, &iad));

    assert!(jfk.cancel_flight(&iad));
    assert!(!can_reach(&bos, &iad));
}

#[test]
fn can_reach_across_a_wide_network() {
    let hubs: Vec<Airport> = (0..200).map(|i| Airport::new(format!("H{i:03}"))).collect();
    for (i, from) in hubs.iter().enumerate() {
        // Every hub flies to the next two, and the last wraps around.
        from.add_flight(&hubs[(i + 1) % hubs.len()]);
        from.add_flight(&hubs[(i + 2) % hubs.len()]);
    }
    let island = Airport::new("ISL");

    assert!(can_reach(&hubs[0], &hubs[199]));
    assert!(can_reach(&hubs[150], &hubs[3]));
    assert!(!can_reach(&hubs[0], &island));
}
