//! Train/val/test identity lists.

use crate::{common::*, identity::PersonId};

/// Directory under the dataset root holding the split files.
pub const EXP_DIR: &str = "exp";
pub const TRAIN_ID_FILE: &str = "train_id.txt";
pub const VAL_ID_FILE: &str = "val_id.txt";
pub const TEST_ID_FILE: &str = "test_id.txt";

/// Parse a comma-separated list of integer identities.
pub fn parse_id_list(text: &str) -> Result<Vec<PersonId>> {
    text.split(',').map(|token| token.parse()).try_collect()
}

/// Read and parse an identity list file.
pub fn read_id_file<P>(path: P) -> Result<Vec<PersonId>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read id list file '{}'", path.display()))?;
    let ids = parse_id_list(&text)
        .with_context(|| format!("failed to parse id list file '{}'", path.display()))?;
    debug!("loaded {} ids from '{}'", ids.len(), path.display());
    Ok(ids)
}

/// The identity partition shipped with the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIds {
    pub train: Vec<PersonId>,
    pub val: Vec<PersonId>,
    pub test: Vec<PersonId>,
}

impl SplitIds {
    /// Load the three split files from `<dataset_dir>/exp`.
    pub fn load<P>(dataset_dir: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let exp_dir = dataset_dir.as_ref().join(EXP_DIR);
        let train = read_id_file(exp_dir.join(TRAIN_ID_FILE))?;
        let val = read_id_file(exp_dir.join(VAL_ID_FILE))?;
        let test = read_id_file(exp_dir.join(TEST_ID_FILE))?;

        Ok(Self { train, val, test })
    }

    /// Identities used for training, the train list followed by the val list.
    pub fn training(&self) -> Vec<PersonId> {
        self.train.iter().chain(self.val.iter()).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ids: &[PersonId]) -> Vec<&str> {
        ids.iter().map(PersonId::as_str).collect()
    }

    #[test]
    fn parse_list() -> Result<()> {
        assert_eq!(names(&parse_id_list("7,42,123")?), ["0007", "0042", "0123"]);
        assert_eq!(names(&parse_id_list("1,2,3\n")?), ["0001", "0002", "0003"]);
        assert_eq!(names(&parse_id_list("5")?), ["0005"]);
        assert_eq!(names(&parse_id_list("-3,7")?), ["-003", "0007"]);
        Ok(())
    }

    #[test]
    fn parse_list_failure() {
        assert!(parse_id_list("").is_err());
        assert!(parse_id_list("1,2,").is_err());
        assert!(parse_id_list("1,x,3").is_err());
        assert!(parse_id_list("1;2").is_err());
    }

    #[test]
    fn training_merges_train_and_val() {
        let split = SplitIds {
            train: vec![PersonId::new(2), PersonId::new(1)],
            val: vec![PersonId::new(3)],
            test: vec![PersonId::new(4)],
        };
        assert_eq!(names(&split.training()), ["0002", "0001", "0003"]);
    }
}
