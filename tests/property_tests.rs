use proptest::prelude::*;
use usercluster::{
    GeoPoint, UserRecord, cluster_by_interest, cluster_by_location, find_similar_users,
    haversine_km,
};

const TAGS: &[&str] = &["chess", "reading", "football", "running", "jazz", "piano", "go", "rust"];

fn coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), -80.0f64..80.0]
}

fn interest_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(TAGS).prop_map(str::to_string), 0..4)
}

proptest! {
    #[test]
    fn prop_haversine_symmetric(
        lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
        lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
    ) {
        let p = GeoPoint::new(lat1, lon1);
        let q = GeoPoint::new(lat2, lon2);
        prop_assert!((haversine_km(p, q) - haversine_km(q, p)).abs() < 1e-9);
        prop_assert_eq!(haversine_km(p, p), 0.0);
        prop_assert!(haversine_km(p, q) >= 0.0);
    }

    #[test]
    fn prop_location_clusters_well_formed(
        coords in prop::collection::vec((coordinate(), coordinate()), 0..25),
        radius in 1.0f64..2000.0,
    ) {
        let users: Vec<UserRecord> = coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| UserRecord::new(i.to_string()).with_position(lat, lon))
            .collect();

        let clusters = cluster_by_location(&users, radius).unwrap();
        let mut seen = std::collections::HashSet::new();
        for cluster in &clusters {
            prop_assert_eq!(cluster.size, cluster.member_ids.len());
            prop_assert!(cluster.size >= 2);
            for id in &cluster.member_ids {
                // No user lands in two clusters
                prop_assert!(seen.insert(id.to_string()));

                let (lat, lon) = coords[id.to_string().parse::<usize>().unwrap()];
                prop_assert!(lat != 0.0 && lon != 0.0, "zero coordinate clustered");
            }
        }
    }

    #[test]
    fn prop_identical_pair_beats_outlier(
        lat in 1.0f64..60.0, lon in 1.0f64..60.0,
        radius in 0.001f64..100.0,
    ) {
        let users = vec![
            UserRecord::new("a").with_position(lat, lon),
            UserRecord::new("b").with_position(lat, lon),
            UserRecord::new("far").with_position(-lat, -lon - 100.0),
        ];

        let clusters = cluster_by_location(&users, radius).unwrap();
        prop_assert_eq!(clusters.len(), 1);
        prop_assert_eq!(&clusters[0].member_ids, &vec!["a", "b"]);
    }

    #[test]
    fn prop_interest_clusters_exclude_empty(
        lists in prop::collection::vec(interest_list(), 0..15),
        n_clusters in 0usize..8,
    ) {
        let users: Vec<UserRecord> = lists
            .iter()
            .enumerate()
            .map(|(i, tags)| UserRecord::new(i.to_string()).with_interests(tags.clone()))
            .collect();

        let clusters = cluster_by_interest(&users, n_clusters).unwrap();
        prop_assert!(clusters.len() <= n_clusters);
        for cluster in &clusters {
            prop_assert_eq!(cluster.size, cluster.member_ids.len());
            prop_assert!(cluster.size >= 2);
            for id in &cluster.member_ids {
                prop_assert!(!lists[id.to_string().parse::<usize>().unwrap()].is_empty());
            }
        }
    }

    #[test]
    fn prop_similar_users_bounded_and_related(
        query in interest_list(),
        lists in prop::collection::vec(interest_list(), 0..15),
        top_n in 0usize..6,
    ) {
        let users: Vec<UserRecord> = lists
            .iter()
            .enumerate()
            .map(|(i, tags)| UserRecord::new(i.to_string()).with_interests(tags.clone()))
            .collect();

        let similar = find_similar_users(&query, &users, top_n);
        prop_assert!(similar.len() <= top_n);
        for id in &similar {
            // A positive similarity needs at least one shared tag
            let tags = &lists[id.to_string().parse::<usize>().unwrap()];
            prop_assert!(tags.iter().any(|t| query.contains(t)));
        }
    }
}
