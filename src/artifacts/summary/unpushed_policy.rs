/// Decides which branch states count as "changes not pushed".
///
/// Dirty, ahead and upstream-less branches always count. Whether being only
/// behind the upstream counts is a choice: nothing local would be lost, yet the
/// working copy is not in sync either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpushedPolicy {
    pub count_behind: bool,
}

impl Default for UnpushedPolicy {
    fn default() -> Self {
        UnpushedPolicy { count_behind: true }
    }
}

impl UnpushedPolicy {
    pub fn ignoring_behind() -> Self {
        UnpushedPolicy {
            count_behind: false,
        }
    }
}
