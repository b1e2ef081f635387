use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node(u32);

#[test]
fn new_binding_is_empty() {
    let binding: ViewBinding<Node> = ViewBinding::new();
    assert!(!binding.is_bound());
    assert_eq!(binding.get(), None);
}

#[test]
fn first_bind_stores_the_node() {
    let mut binding = ViewBinding::new();
    binding.bind(Some(Node(1))).unwrap();
    assert!(binding.is_bound());
    assert_eq!(binding.get(), Some(&Node(1)));
}

#[test]
fn binding_an_absent_node_is_invalid() {
    let mut binding: ViewBinding<Node> = ViewBinding::new();
    assert!(matches!(binding.bind(None), Err(Error::NullNode)));
    assert!(!binding.is_bound());
}

#[test]
fn rebind_is_illegal_state() {
    let mut binding = ViewBinding::new();
    binding.bind(Some(Node(1))).unwrap();
    assert!(matches!(binding.bind(Some(Node(2))), Err(Error::AlreadyBound)));
}

#[test]
fn rebinding_the_same_node_is_still_illegal() {
    let mut binding = ViewBinding::new();
    binding.bind(Some(Node(1))).unwrap();
    assert!(matches!(binding.bind(Some(Node(1))), Err(Error::AlreadyBound)));
}

#[test]
fn failed_rebind_keeps_the_first_node() {
    let mut binding = ViewBinding::new();
    binding.bind(Some(Node(1))).unwrap();
    assert!(binding.bind(Some(Node(2))).is_err());
    assert_eq!(binding.get(), Some(&Node(1)));
}

#[test]
fn absent_node_after_bind_does_not_clear() {
    let mut binding = ViewBinding::new();
    binding.bind(Some(Node(1))).unwrap();
    // A null node is rejected for its nullness before the write-once check.
    assert!(matches!(binding.bind(None), Err(Error::NullNode)));
    assert_eq!(binding.get(), Some(&Node(1)));
}
