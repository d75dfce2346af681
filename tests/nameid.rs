use proptest::prelude::*;
use dccid::id::{dcc_namespace, nameid, Id, RandomId, RawId};

proptest! {
    #[test]
    fn deterministic(ns in RandomId(), name in proptest::collection::vec(any::<u8>(), 0..64)) {
        let ns = Id::new(ns);
        prop_assert_eq!(nameid(ns, &name), nameid(ns, &name));
    }

    #[test]
    fn namespace_sensitivity(ns1 in RandomId(), ns2 in RandomId(), name in ".*") {
        prop_assume!(ns1 != ns2);
        prop_assert_ne!(
            nameid(Id::new(ns1), &name),
            nameid(Id::new(ns2), &name)
        );
    }

    #[test]
    fn name_sensitivity(ns in RandomId(), name in ".+") {
        let ns = Id::new(ns);
        let mut other = name.clone();
        other.push('x');
        prop_assert_ne!(nameid(ns, &name), nameid(ns, &other));
    }

    #[test]
    fn version_and_variant(ns in RandomId(), name in proptest::collection::vec(any::<u8>(), 0..64)) {
        let id = nameid(Id::new(ns), &name);
        let raw: &RawId = id.as_ref();
        prop_assert_eq!(raw[6] >> 4, 5, "version nibble");
        prop_assert_eq!(raw[8] >> 6, 0b10, "variant bits");
    }

    #[test]
    fn str_and_bytes_agree(name in ".*") {
        let ns = Some(dcc_namespace());
        prop_assert_eq!(nameid(ns, name.as_str()), nameid(ns, name.as_bytes()));
    }
}
