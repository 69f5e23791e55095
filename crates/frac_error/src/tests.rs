use crate::{RenderError, concat_commas, set_color, substr_edit_distance};

struct DummyError(bool);

impl RenderError for DummyError {
    fn kind_name(&self) -> String {
        String::from("dummy error")
    }

    fn message(&self) -> String {
        String::from("something went wrong")
    }

    fn help(&self) -> String {
        if self.0 {
            String::from("try again")
        }

        else {
            String::new()
        }
    }
}

#[test]
fn render_error_test() {
    set_color(false);

    assert_eq!(
        DummyError(false).render_error(),
        "[Error] dummy error: something went wrong",
    );
    assert_eq!(
        DummyError(true).render_error(),
        "[Error] dummy error: something went wrong\nHelp: try again",
    );
}

#[test]
fn edit_distance_test() {
    let samples: Vec<(&[u8], &[u8], usize)> = vec![
        (b"--decimal", b"--decimal", 0),
        (b"--decmal", b"--decimal", 1),
        (b"--widht", b"--width", 1),
        (b"--NO_COLOR", b"--no-color", 0),
        (b"abc", b"", 3),
        (b"", b"abc", 3),
    ];

    for (a, b, dist) in samples.into_iter() {
        assert_eq!(
            substr_edit_distance(a, b),
            dist,
            "{:?} vs {:?}",
            String::from_utf8_lossy(a),
            String::from_utf8_lossy(b),
        );
    }
}

#[test]
fn concat_commas_test() {
    let list = vec![String::from("a"), String::from("b"), String::from("c")];

    assert_eq!(concat_commas(&list[..1], "or", "`", "`"), "`a`");
    assert_eq!(concat_commas(&list[..2], "or", "`", "`"), "`a` or `b`");
    assert_eq!(concat_commas(&list, "or", "`", "`"), "`a`, `b` or `c`");
}
