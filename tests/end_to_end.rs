use usercluster::{
    ClusterType, UserRecord, cluster_by_interest, cluster_by_location, format_response,
    payload::parse_users, validate,
};

#[test]
fn test_location_pipeline_from_wire_payload() {
    let users = parse_users(
        r#"{
            "users": [
                { "_id": "u1", "username": "ana", "location": { "type": "Point", "coordinates": [0.01, 0.01] } },
                { "_id": "u2", "username": "ben", "location": { "type": "Point", "coordinates": [0.011, 0.01] } },
                { "_id": "u3", "username": "cai", "location": { "type": "Point", "coordinates": [50.0, 50.0] } },
                { "_id": "u4", "username": "dee", "location": { "type": "Point", "coordinates": [0, 0] } }
            ],
            "max_distance": 1.0
        }"#,
    )
    .unwrap();

    validate(&users, ClusterType::Location).unwrap();
    let clusters = cluster_by_location(&users, 1.0).unwrap();
    let response = format_response(clusters, ClusterType::Location);

    assert!(response.success);
    assert_eq!(response.total_clusters, Some(1));
    assert_eq!(response.clusters[0].member_ids, vec!["u1", "u2"]);
    assert_eq!(response.clusters[0].size, 2);
}

#[test]
fn test_interest_pipeline_groups_topics() {
    let users = vec![
        UserRecord::new("1").with_interests(["chess", "reading"]),
        UserRecord::new("2").with_interests(["chess", "reading"]),
        UserRecord::new("3").with_interests(["football", "running"]),
        UserRecord::new("4").with_interests(["football", "running"]),
    ];

    validate(&users, ClusterType::Interest).unwrap();
    let clusters = cluster_by_interest(&users, 2).unwrap();
    let response = format_response(clusters, ClusterType::Interest);

    assert!(response.success);
    assert_eq!(response.total_clusters, Some(2));

    let mut groups: Vec<Vec<String>> = response
        .clusters
        .iter()
        .map(|c| c.member_ids.iter().map(ToString::to_string).collect())
        .collect();
    groups.sort();
    assert_eq!(groups, vec![vec!["1", "2"], vec!["3", "4"]]);
}

#[test]
fn test_interest_pipeline_three_topics() {
    let topics = [
        ["hiking", "camping"],
        ["jazz", "piano"],
        ["python", "rust"],
    ];
    let users: Vec<UserRecord> = (0..9)
        .map(|i| UserRecord::new(format!("u{i}")).with_interests(topics[i % 3]))
        .collect();

    let clusters = cluster_by_interest(&users, 3).unwrap();
    assert_eq!(clusters.len(), 3);

    for cluster in &clusters {
        assert_eq!(cluster.size, 3);
        let first: usize = cluster.member_ids[0].to_string()[1..].parse().unwrap();
        for id in &cluster.member_ids {
            let i: usize = id.to_string()[1..].parse().unwrap();
            assert_eq!(i % 3, first % 3, "cluster mixes topics: {:?}", cluster.member_ids);
        }
    }
}

#[test]
fn test_degraded_batch_does_not_fail() {
    let users = parse_users(
        r#"[
            { "_id": "a", "location": { "coordinates": [12.0] } },
            { "_id": "b", "location": {} },
            { "_id": "c", "interests": [] },
            { "_id": "d" }
        ]"#,
    )
    .unwrap();

    assert!(cluster_by_location(&users, 1.0).unwrap().is_empty());
    assert!(cluster_by_interest(&users, 3).unwrap().is_empty());

    let response = format_response(vec![], ClusterType::Location);
    assert!(!response.success);
    assert!(response.message.is_some());
}
