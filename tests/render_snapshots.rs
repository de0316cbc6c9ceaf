mod harness;

use harness::{create_test_state, create_test_terminal, render_to_string};

use age_op::app::spinner::SpinnerState;
use age_op::app::state::Phase;

#[test]
fn running_first_frame() {
    let state = create_test_state();
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output, @"⣾ Loading...");
}

#[test]
fn running_later_frame() {
    let mut state = create_test_state();
    state.spinner = SpinnerState::at_frame(3);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output, @"⢿ Loading...");
}

#[test]
fn done_replaces_spinner_line() {
    let mut state = create_test_state();
    let mut terminal = create_test_terminal();
    render_to_string(&mut terminal, &state);
    state.phase = Phase::Done;

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output, @"Hello, cruel world!");
}
