//! # Randomized Call Sequences
//!
//! Random mixes of calls from a small pool of principals and ids, checked
//! against a reference model of the lifecycle after every step.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use pv_registry::prelude::*;
    use serde_json::json;
    use std::collections::HashMap;

    const PRINCIPALS: [&str; 3] = ["ST1ADMIN", "ST2OWNER", "ST3OTHER"];
    const IDS: u64 = 4;

    #[derive(Debug, Clone)]
    enum Call {
        SetAdmin { sender: usize, new_admin: usize },
        Submit { sender: usize, id: u64 },
        Verify { sender: usize, id: u64, value: u64, approve: bool },
    }

    fn call() -> impl Strategy<Value = Call> {
        prop_oneof![
            1 => (0..3usize, 0..3usize)
                .prop_map(|(sender, new_admin)| Call::SetAdmin { sender, new_admin }),
            3 => (0..3usize, 0..IDS).prop_map(|(sender, id)| Call::Submit { sender, id }),
            3 => (0..3usize, 0..IDS, any::<u64>(), any::<bool>()).prop_map(
                |(sender, id, value, approve)| Call::Verify { sender, id, value, approve }
            ),
        ]
    }

    /// Reference model: admin index plus per-id lifecycle.
    #[derive(Debug)]
    struct Model {
        admin: usize,
        states: HashMap<u64, PropertyLifecycle>,
    }

    impl Model {
        fn state(&self, id: u64) -> PropertyLifecycle {
            self.states.get(&id).copied().unwrap_or(PropertyLifecycle::Empty)
        }

        fn apply(&mut self, call: &Call) -> CallResult {
            match *call {
                Call::SetAdmin { sender, new_admin } => {
                    if sender != self.admin {
                        return CallResult::Err(codes::NOT_AUTHORIZED);
                    }
                    self.admin = new_admin;
                    CallResult::Ok(json!(true))
                }
                Call::Submit { id, .. } => match self.state(id) {
                    PropertyLifecycle::Verified => CallResult::Err(codes::PROPERTY_EXISTS),
                    PropertyLifecycle::Pending => CallResult::Err(codes::REQUEST_PENDING),
                    PropertyLifecycle::Empty => {
                        self.states.insert(id, PropertyLifecycle::Pending);
                        CallResult::Ok(json!(true))
                    }
                },
                Call::Verify { sender, id, approve, .. } => {
                    if sender != self.admin {
                        return CallResult::Err(codes::NOT_AUTHORIZED);
                    }
                    if self.state(id) != PropertyLifecycle::Pending {
                        return CallResult::Err(codes::NO_PENDING_REQUEST);
                    }
                    let next = if approve {
                        PropertyLifecycle::Verified
                    } else {
                        PropertyLifecycle::Empty
                    };
                    self.states.insert(id, next);
                    CallResult::Ok(json!(approve))
                }
            }
        }
    }

    fn execute(handler: &InMemoryHandler, call: &Call) -> CallResult {
        let (method, args, sender) = match *call {
            Call::SetAdmin { sender, new_admin } => {
                ("set-admin", vec![json!(PRINCIPALS[new_admin])], sender)
            }
            Call::Submit { sender, id } => (
                "submit-property",
                vec![json!(id), json!("1 Elm St"), json!("0xabcdef")],
                sender,
            ),
            Call::Verify { sender, id, value, approve } => (
                "verify-property",
                vec![json!(id), json!(value), json!(approve)],
                sender,
            ),
        };
        let sender = Principal::new(PRINCIPALS[sender]).unwrap();
        handler
            .call_public(CallRequest::public(method, args, sender))
            .unwrap()
            .result
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        /// Every call answers exactly what the model predicts, and the
        /// stored state agrees with the model afterwards.
        #[test]
        fn handler_matches_model(calls in prop::collection::vec(call(), 1..48)) {
            let admin = Principal::new(PRINCIPALS[0]).unwrap();
            let handler = InMemoryHandler::in_memory(&RegistryConfig::new(admin)).unwrap();
            let mut model = Model { admin: 0, states: HashMap::new() };

            for call in &calls {
                let expected = model.apply(call);
                prop_assert_eq!(execute(&handler, call), expected, "call {:?}", call);

                handler.with_service(|service| {
                    assert!(check_all_invariants(service.store()).is_empty());
                    for id in 0..IDS {
                        assert_eq!(service.lifecycle(PropertyId::new(id)), model.state(id));
                    }
                });
            }

            let admin = handler.with_service(|service| service.get_admin());
            prop_assert_eq!(admin.as_str(), PRINCIPALS[model.admin]);
        }

        /// Every accepted mutating call emits exactly one event.
        #[test]
        fn one_event_per_accepted_call(calls in prop::collection::vec(call(), 1..48)) {
            let admin = Principal::new(PRINCIPALS[0]).unwrap();
            let handler = InMemoryHandler::in_memory(&RegistryConfig::new(admin)).unwrap();

            let accepted = calls
                .iter()
                .filter(|call| execute(&handler, call).is_ok())
                .count();

            let emitted = handler.with_service(|service| service.events().len());
            prop_assert_eq!(emitted, accepted);
        }
    }
}
