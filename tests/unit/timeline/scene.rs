use super::*;

#[test]
fn lifecycle_runs_absent_present_removed() {
    let mut s = Scene::new();
    let id = GroupId(3);
    assert_eq!(s.state(id), Lifecycle::Absent);
    s.introduce(id).unwrap();
    s.mutate(id).unwrap();
    s.mutate(id).unwrap();
    assert_eq!(s.state(id), Lifecycle::Present { mutations: 2 });
    assert!(s.remove(id));
    assert_eq!(s.state(id), Lifecycle::Removed);
}

#[test]
fn double_removal_is_a_no_op() {
    let mut s = Scene::new();
    s.introduce(GroupId(0)).unwrap();
    s.introduce(GroupId(1)).unwrap();
    assert!(s.remove(GroupId(0)));
    let before = s.present().to_vec();
    assert!(!s.remove(GroupId(0)));
    assert!(!s.remove(GroupId(7)));
    assert_eq!(s.present(), before.as_slice());
}

#[test]
fn removed_groups_never_come_back() {
    let mut s = Scene::new();
    s.introduce(GroupId(0)).unwrap();
    s.remove(GroupId(0));
    let err = s.introduce(GroupId(0)).unwrap_err();
    assert!(err.to_string().contains("cannot re-enter"));
}

#[test]
fn present_groups_cannot_be_introduced_twice() {
    let mut s = Scene::new();
    s.introduce(GroupId(0)).unwrap();
    assert!(s.introduce(GroupId(0)).is_err());
}

#[test]
fn mutating_absent_group_fails() {
    let mut s = Scene::new();
    assert!(s.mutate(GroupId(0)).is_err());
}

#[test]
fn clear_reports_id_order_and_empties_scene() {
    let mut s = Scene::new();
    for id in [5, 2, 9] {
        s.introduce(GroupId(id)).unwrap();
    }
    assert_eq!(s.present(), &[GroupId(5), GroupId(2), GroupId(9)]);
    assert_eq!(s.clear(), vec![GroupId(2), GroupId(5), GroupId(9)]);
    assert!(s.present().is_empty());
    assert!(s.clear().is_empty());
}
