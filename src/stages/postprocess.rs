/// Orthographic fixes that the tables cannot express.
///
/// Currently one: `aia` after a letter other than `t` becomes `aja` (`papaia`
/// becomes `papaja`, `kastaia` stays). A word-initial `aia` is left alone.
pub fn apply_postprocessing(word: &str) -> String {
    regex!(r"([\w&&[^t]])aia").replace_all(word, "${1}aja").into_owned()
}
