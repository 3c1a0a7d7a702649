use cube3::{Cube, CubieState, Face, FaceletState, MoveSequence, Representation};

fn stickers(cube: &mut Cube) -> String {
    cube.facelet_state().stickers().map(Face::letter).collect()
}

#[test_log::test]
fn test_known_sticker_layouts() {
    let cases = [
        ("", "UUUUUUUUUDDDDDDDDDFFFFFFFFFBBBBBBBBBRRRRRRRRRLLLLLLLLL"),
        ("R_", "UUFUUFUUFBDDBDDBDDFFDFFDFFDUBBUBBUBBRRRRRRRRRLLLLLLLLL"),
        ("U_", "UUUUUUUUUDDDDDDDDDRRRFFFFFFLLLBBBBBBBRRBRRBRRLLFLLFLLF"),
        ("F_", "UUUUUULLLDDDDDDRRRFFFFFFFFFBBBBBBBBBRRRRRRUUULLLLLLDDD"),
        (
            "R_U_F_",
            "UUUUUULLDBDDBDDURRFFRFFRDDRLLLUBBUBBBRRBRRFFFLLFLLFBDD",
        ),
    ];

    for (scramble, expected) in cases {
        let mut cube = Cube::new_solved();
        cube.apply_str(scramble).unwrap();
        assert_eq!(stickers(&mut cube), expected, "after {scramble:?}");
    }
}

#[test_log::test]
fn test_parsed_stickers_solve_back() {
    let facelet_state = "UUUUUULLDBDDBDDURRFFRFFRDDRLLLUBBUBBBRRBRRFFFLLFLLFBDD"
        .parse::<FaceletState>()
        .unwrap();
    let mut cube = Cube::from_facelets(facelet_state);
    assert!(cube.is_reachable());
    assert!(!cube.is_oriented().unwrap());

    cube.apply_str("F'U'R'").unwrap();
    assert!(cube.is_solved());
}

#[test_log::test]
fn test_round_trip_through_both_encodings() {
    for _ in 0..50 {
        let mut cube = Cube::new_scrambled_random();
        let Representation::Cubie(original) = *cube.representation() else {
            panic!("random cubes start in the cubie encoding");
        };

        let facelet_state = *cube.facelet_state();
        let mut reparsed = Cube::from_facelets(facelet_state);
        assert_eq!(*reparsed.cubie_state().unwrap(), original);
        assert_eq!(*cube.cubie_state().unwrap(), original);
    }
}

#[test_log::test]
fn test_turns_on_parsed_stickers() {
    let mut cube = Cube::from_facelets(
        "UUFUUFUUFBDDBDDBDDFFDFFDFFDUBBUBBUBBRRRRRRRRRLLLLLLLLL"
            .parse::<FaceletState>()
            .unwrap(),
    );
    cube.apply_str("U_F_").unwrap();
    assert_eq!(
        stickers(&mut cube),
        "UUUUUULLDBDDBDDURRFFRFFRDDRLLLUBBUBBBRRBRRFFFLLFLLFBDD"
    );
}

#[test_log::test]
fn test_sequence_then_inverse_is_identity() {
    let sequence = "R_U'F2L_B'D2".parse::<MoveSequence>().unwrap();
    let mut state = CubieState::random_reachable();
    let before = state;
    state.apply_sequence(&sequence);
    state.apply_sequence(&sequence.inverse());
    assert_eq!(state, before);
}
