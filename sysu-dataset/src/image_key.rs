//! Extraction of camera, person and image ids from source paths.

use crate::common::*;

/// The ids encoded in a source image path `.../cam<C>/<P>/<I>...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageKey {
    pub camera_id: String,
    pub person_id: String,
    pub image_id: String,
}

impl ImageKey {
    /// Find the leftmost `cam<digits>/<digits>/<digits>` run of path parts.
    ///
    /// Both `/` and `\` separate parts. The first part only needs to end with
    /// `cam<digits>` and the last one only needs to start with digits, so
    /// `.../cam3/0007/0012.jpg` yields camera `3`, person `0007` and image
    /// `0012`.
    pub fn parse<P>(path: P) -> Option<Self>
    where
        P: AsRef<Path>,
    {
        let text = path.as_ref().to_string_lossy();
        text.split(|c: char| c == '/' || c == '\\')
            .tuple_windows()
            .find_map(|(camera, person, image)| Self::from_parts(camera, person, image))
    }

    fn from_parts(camera: &str, person: &str, image: &str) -> Option<Self> {
        let camera_id = trailing_digits(camera);
        let camera_prefix = &camera[..camera.len() - camera_id.len()];
        if camera_id.is_empty() || !camera_prefix.ends_with("cam") {
            return None;
        }

        if person.is_empty() || !person.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let image_id = leading_digits(image);
        if image_id.is_empty() {
            return None;
        }

        Some(Self {
            camera_id: camera_id.to_owned(),
            person_id: person.to_owned(),
            image_id: image_id.to_owned(),
        })
    }

    /// The flat output file name `<pid>_c<camid>_<imgid>.jpg`.
    pub fn file_name(&self) -> String {
        format!("{}_c{}_{}.jpg", self.person_id, self.camera_id, self.image_id)
    }
}

fn trailing_digits(text: &str) -> &str {
    let len = text.bytes().rev().take_while(u8::is_ascii_digit).count();
    &text[text.len() - len..]
}

fn leading_digits(text: &str) -> &str {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    &text[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_name(path: &str) -> Option<String> {
        ImageKey::parse(path).map(|key| key.file_name())
    }

    #[test]
    fn parse_regular_path() {
        let key = ImageKey::parse("/data/SYSU-MM01/cam3/0007/0012.jpg").unwrap();
        assert_eq!(
            key,
            ImageKey {
                camera_id: "3".into(),
                person_id: "0007".into(),
                image_id: "0012".into(),
            }
        );
        assert_eq!(key.file_name(), "0007_c3_0012.jpg");
    }

    #[test]
    fn parse_mixed_separators() {
        assert_eq!(
            file_name(r"D:\data\cam1\0333\0001.jpg").as_deref(),
            Some("0333_c1_0001.jpg")
        );
        assert_eq!(
            file_name(r"data/cam12\0333/0001").as_deref(),
            Some("0333_c12_0001.jpg")
        );
    }

    #[test]
    fn camera_part_matches_by_suffix() {
        assert_eq!(
            file_name("root/webcam5/0010/0002.png").as_deref(),
            Some("0010_c5_0002.jpg")
        );
        assert_eq!(
            file_name("root/cam0cam2/0010/0002.jpg").as_deref(),
            Some("0010_c2_0002.jpg")
        );
    }

    #[test]
    fn leftmost_match_wins() {
        assert_eq!(
            file_name("cam1/0001/0002/cam4/0005/0006.jpg").as_deref(),
            Some("0001_c1_0002.jpg")
        );
        assert_eq!(
            file_name("cam1/x/cam4/0005/0006.jpg").as_deref(),
            Some("0005_c4_0006.jpg")
        );
    }

    #[test]
    fn reject_unexpected_shapes() {
        assert_eq!(file_name("root/cam1/0001/a.jpg"), None);
        assert_eq!(file_name("root/cam/0001/0002.jpg"), None);
        assert_eq!(file_name("root/cam1x/0001/0002.jpg"), None);
        assert_eq!(file_name("root/cam1/00a1/0002.jpg"), None);
        assert_eq!(file_name("root/cam1//0001/0002.jpg"), None);
        assert_eq!(file_name("root/cam1/0001"), None);
        assert_eq!(file_name(""), None);
    }
}
