//! # Integration Test Flows
//!
//! Each scenario deploys a fresh registry and drives it only through the
//! JSON calling convention, the way a host would.

#[cfg(test)]
mod tests {
    use pv_registry::prelude::*;
    use serde_json::{json, Value};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
    const OWNER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
    const OTHER: &str = "ST3NBRSFKX28FQ2ZJ1MAKX58HKHSDGNV5N7R21XCP";

    const ADDRESS: &str = "123 Main St, Anytown, USA";
    const HASH: &str = "0x1234567890abcdef";

    fn principal(s: &str) -> Principal {
        Principal::new(s).unwrap()
    }

    fn deploy() -> InMemoryHandler {
        pv_telemetry::init_test_tracing();
        let config = RegistryConfig::new(principal(ADMIN)).with_genesis_height(100);
        InMemoryHandler::in_memory(&config).unwrap()
    }

    fn public(h: &InMemoryHandler, method: &str, args: Vec<Value>, sender: &str) -> CallResult {
        h.call_public(CallRequest::public(method, args, principal(sender)))
            .unwrap()
            .result
    }

    fn read(h: &InMemoryHandler, method: &str, args: Vec<Value>) -> CallResult {
        h.call_read_only(CallRequest::read_only(method, args))
            .unwrap()
            .result
    }

    fn submit(h: &InMemoryHandler, id: u64, sender: &str) -> CallResult {
        public(h, "submit-property", vec![json!(id), json!(ADDRESS), json!(HASH)], sender)
    }

    fn verify(h: &InMemoryHandler, id: u64, value: u64, approve: bool, sender: &str) -> CallResult {
        public(
            h,
            "verify-property",
            vec![json!(id), json!(value), json!(approve)],
            sender,
        )
    }

    // =============================================================================
    // LIFECYCLE
    // =============================================================================

    #[test]
    fn test_submit_and_approve() {
        let h = deploy();

        assert_eq!(submit(&h, 1, OWNER), CallResult::Ok(json!(true)));
        assert_eq!(verify(&h, 1, 1_000_000, true, ADMIN), CallResult::Ok(json!(true)));

        assert_eq!(
            read(&h, "get-property", vec![json!(1)]),
            CallResult::Some(json!({
                "owner": OWNER,
                "address": ADDRESS,
                "verified": true,
                "value": 1_000_000,
                "creationTime": 100,
            }))
        );
        assert_eq!(read(&h, "get-verification-request", vec![json!(1)]), CallResult::None);
        assert_eq!(read(&h, "is-property-verified", vec![json!(1)]), CallResult::Ok(json!(true)));
    }

    #[test]
    fn test_reject_then_resubmit() {
        let h = deploy();

        submit(&h, 7, OWNER);
        assert_eq!(verify(&h, 7, 0, false, ADMIN), CallResult::Ok(json!(false)));
        assert_eq!(read(&h, "get-property", vec![json!(7)]), CallResult::None);

        // The id is free again, and anyone may claim it.
        assert_eq!(submit(&h, 7, OTHER), CallResult::Ok(json!(true)));
        let request = read(&h, "get-verification-request", vec![json!(7)]);
        assert_eq!(request.value().unwrap()["owner"], json!(OTHER));
    }

    #[test]
    fn test_duplicate_submissions() {
        let h = deploy();

        submit(&h, 1, OWNER);
        assert_eq!(submit(&h, 1, OTHER), CallResult::Err(codes::REQUEST_PENDING));

        verify(&h, 1, 10, true, ADMIN);
        assert_eq!(submit(&h, 1, OWNER), CallResult::Err(codes::PROPERTY_EXISTS));

        // The verified record is untouched.
        let property = read(&h, "get-property", vec![json!(1)]);
        assert_eq!(property.value().unwrap()["value"], json!(10));
    }

    #[test]
    fn test_verify_requires_admin_and_pending_request() {
        let h = deploy();

        assert_eq!(verify(&h, 1, 1, true, ADMIN), CallResult::Err(codes::NO_PENDING_REQUEST));
        submit(&h, 1, OWNER);

        // The owner cannot approve their own submission.
        assert_eq!(verify(&h, 1, 1, true, OWNER), CallResult::Err(codes::NOT_AUTHORIZED));
        assert!(read(&h, "get-verification-request", vec![json!(1)]).value().is_some());

        // Already adjudicated.
        verify(&h, 1, 1, true, ADMIN);
        assert_eq!(verify(&h, 1, 1, true, ADMIN), CallResult::Err(codes::NO_PENDING_REQUEST));
    }

    // =============================================================================
    // ADMINISTRATION
    // =============================================================================

    #[test]
    fn test_admin_transfer() {
        let h = deploy();

        assert_eq!(
            public(&h, "set-admin", vec![json!(OTHER)], OWNER),
            CallResult::Err(codes::NOT_AUTHORIZED)
        );
        assert_eq!(
            public(&h, "set-admin", vec![json!(OTHER)], ADMIN),
            CallResult::Ok(json!(true))
        );
        assert_eq!(read(&h, "get-admin", vec![]), CallResult::Ok(json!(OTHER)));

        // The old admin lost the role.
        submit(&h, 3, OWNER);
        assert_eq!(verify(&h, 3, 5, true, ADMIN), CallResult::Err(codes::NOT_AUTHORIZED));
        assert_eq!(verify(&h, 3, 5, true, OTHER), CallResult::Ok(json!(true)));
    }

    #[test]
    fn test_set_admin_to_self_is_noop() {
        let h = deploy();
        assert_eq!(
            public(&h, "set-admin", vec![json!(ADMIN)], ADMIN),
            CallResult::Ok(json!(true))
        );
        assert_eq!(read(&h, "get-admin", vec![]), CallResult::Ok(json!(ADMIN)));
    }

    // =============================================================================
    // CALLING CONVENTION
    // =============================================================================

    #[test]
    fn test_unknown_methods() {
        let h = deploy();
        assert_eq!(read(&h, "get-everything", vec![]), CallResult::Err(codes::METHOD_NOT_FOUND));
        assert_eq!(
            public(&h, "delete-property", vec![json!(1)], ADMIN),
            CallResult::Err(codes::METHOD_NOT_FOUND)
        );
    }

    #[test]
    fn test_response_wire_shape() {
        let h = deploy();
        let request: CallRequest = serde_json::from_value(json!({
            "correlation_id": "6f1c2a2e-2b4e-4f7a-9c3d-0a1b2c3d4e5f",
            "method": "get-property",
            "args": [42],
        }))
        .unwrap();

        let response = h.call_read_only(request).unwrap();
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded["correlation_id"], json!("6f1c2a2e-2b4e-4f7a-9c3d-0a1b2c3d4e5f"));
        assert_eq!(encoded["result"], json!({ "type": "none" }));

        let response = h
            .call_public(CallRequest::public("set-admin", vec![json!(OWNER)], principal(OTHER)))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&response.result).unwrap(),
            json!({ "type": "err", "value": 403 })
        );
    }

    #[test]
    fn test_large_value_as_decimal_string() {
        let h = deploy();
        submit(&h, 9, OWNER);

        let huge = u128::MAX.to_string();
        let result = public(
            &h,
            "verify-property",
            vec![json!(9), json!(huge), json!(true)],
            ADMIN,
        );
        assert_eq!(result, CallResult::Ok(json!(true)));

        let property = read(&h, "get-property", vec![json!(9)]);
        assert_eq!(property.value().unwrap()["value"], json!(huge));
    }

    // =============================================================================
    // SIDE CHANNELS
    // =============================================================================

    #[test]
    fn test_events_and_stats_follow_calls() {
        let h = deploy();

        public(&h, "set-admin", vec![json!(OTHER)], ADMIN);
        submit(&h, 1, OWNER);
        submit(&h, 2, OWNER);
        verify(&h, 1, 100, true, OTHER);
        verify(&h, 2, 0, false, OTHER);
        verify(&h, 2, 0, false, OWNER);

        h.with_service(|service| {
            let stats = service.stats();
            assert_eq!(stats.admin_changes, 1);
            assert_eq!(stats.submissions, 2);
            assert_eq!(stats.approvals, 1);
            assert_eq!(stats.rejections, 1);
            assert_eq!(stats.rejected_calls, 1);

            let events = service.events().events();
            assert_eq!(events.len(), 5);
            assert!(matches!(events[0], RegistryEvent::AdminChanged { .. }));
            assert_eq!(service.events().events_for(PropertyId::new(2)).len(), 2);

            assert_eq!(service.lifecycle(PropertyId::new(1)), PropertyLifecycle::Verified);
            assert_eq!(service.lifecycle(PropertyId::new(2)), PropertyLifecycle::Empty);
            assert!(check_all_invariants(service.store()).is_empty());
        });
    }

    #[test]
    fn test_clock_drives_timestamps() {
        let h = deploy();

        submit(&h, 1, OWNER);
        h.with_service(|service| {
            service.clock().advance(5);
        });
        verify(&h, 1, 1, true, ADMIN);

        let property = read(&h, "get-property", vec![json!(1)]);
        assert_eq!(property.value().unwrap()["creationTime"], json!(105));
    }

    #[test]
    fn test_registries_are_isolated() {
        let first = deploy();
        let second = deploy();

        submit(&first, 1, OWNER);
        assert_eq!(read(&second, "get-verification-request", vec![json!(1)]), CallResult::None);
        assert_eq!(submit(&second, 1, OTHER), CallResult::Ok(json!(true)));
    }
}
