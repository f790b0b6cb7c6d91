use crate::{
    view::{Element, Node},
    SelectedFile,
};

pub const FILE_PLACEHOLDER: &str = "Select a file";

#[derive(Debug)]
pub enum FileInputMsg {
    /// The host picked a file, or cleared the selection.
    Selected(Option<SelectedFile>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInputState {
    pub file: Option<SelectedFile>,
}

impl FileInputState {
    pub fn update(&mut self, msg: FileInputMsg) {
        match msg {
            FileInputMsg::Selected(file) => self.file = file,
        }
    }

    /// Text shown on the label: the file name, or a placeholder.
    #[must_use]
    pub fn label(&self) -> &str {
        self.file
            .as_ref()
            .map_or(FILE_PLACEHOLDER, |file| file.name.as_str())
    }

    /// `id` pairs the label with its input and must be unique in the tree.
    #[must_use]
    pub fn view(&self, id: &str) -> Node {
        Element::new("label")
            .class("add-file-label")
            .attr("for", id)
            .text(self.label())
            .child(
                Element::new("input")
                    .class("add-file")
                    .attr("id", id)
                    .attr("type", "file"),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_placeholder_until_a_file_is_selected() {
        let mut state = FileInputState::default();
        assert_eq!(
            state.view("upload").to_html(),
            "<label class=\"add-file-label\" for=\"upload\">Select a file\
             <input class=\"add-file\" id=\"upload\" type=\"file\"></label>"
        );

        state.update(FileInputMsg::Selected(Some(SelectedFile::from_path(
            "/tmp/paper.pdf",
        ))));
        assert_eq!(state.view("upload").text_content(), "paper.pdf");

        state.update(FileInputMsg::Selected(None));
        assert_eq!(state.label(), FILE_PLACEHOLDER);
    }
}
