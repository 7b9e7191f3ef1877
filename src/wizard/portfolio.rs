//! Portfolio projects step.
//!
//! Projects are edited in a scratch record and reach the draft only when the
//! user saves. Nested lists (images, links, technologies) and the optional
//! testimonial are edited on the scratch record directly.

use super::editor::{EditorMode, ScratchEditor};
use super::error::EditorError;
use crate::form::{Effect, Field, FieldKind, Form, ListCursor};
use crate::profile::{
    FreelancerDraft, FreelancerPatch, IdGenerator, ImageRef, PortfolioProject, ProjectLink,
    Testimonial,
};

/// Soft cap on images per project.
pub const MAX_PROJECT_IMAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    Image,
    Images,
    LinkUrl,
    LinkTitle,
    Links,
    Technology,
    Technologies,
    TestimonialClient,
    TestimonialText,
    Save,
    Cancel,
    Projects,
}

impl Field for ProjectField {
    fn label(&self) -> &'static str {
        match self {
            ProjectField::Title => "Project title",
            ProjectField::Description => "Description",
            ProjectField::Image => "Image path",
            ProjectField::Images => "Images",
            ProjectField::LinkUrl => "Link URL",
            ProjectField::LinkTitle => "Link title",
            ProjectField::Links => "Links",
            ProjectField::Technology => "Technology",
            ProjectField::Technologies => "Technologies",
            ProjectField::TestimonialClient => "Client name",
            ProjectField::TestimonialText => "Testimonial",
            ProjectField::Save => "Save project",
            ProjectField::Cancel => "Cancel edit",
            ProjectField::Projects => "Your projects",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            ProjectField::Images
            | ProjectField::Links
            | ProjectField::Technologies
            | ProjectField::Projects => FieldKind::List,
            ProjectField::Save | ProjectField::Cancel => FieldKind::Action,
            _ => FieldKind::Text,
        }
    }
}

/// Editor for the portfolio projects step.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioStep {
    projects: Vec<PortfolioProject>,
    editor: ScratchEditor<PortfolioProject>,
    image_path: String,
    link_url: String,
    link_title: String,
    technology: String,
    testimonial_client: String,
    testimonial_text: String,
    images_cursor: ListCursor,
    links_cursor: ListCursor,
    technologies_cursor: ListCursor,
    projects_cursor: ListCursor,
}

impl PortfolioStep {
    pub fn from_draft(draft: &FreelancerDraft) -> Self {
        PortfolioStep {
            projects: draft.projects().to_vec(),
            editor: ScratchEditor::new(),
            image_path: String::new(),
            link_url: String::new(),
            link_title: String::new(),
            technology: String::new(),
            testimonial_client: String::new(),
            testimonial_text: String::new(),
            images_cursor: ListCursor::default(),
            links_cursor: ListCursor::default(),
            technologies_cursor: ListCursor::default(),
            projects_cursor: ListCursor::default(),
        }
    }

    pub fn projects(&self) -> &[PortfolioProject] {
        &self.projects
    }

    pub fn scratch(&self) -> &PortfolioProject {
        self.editor.scratch()
    }

    pub fn mode(&self) -> EditorMode {
        self.editor.mode()
    }

    /// Current contents of a text field.
    ///
    pub fn input(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Title => &self.editor.scratch().title,
            ProjectField::Description => &self.editor.scratch().description,
            ProjectField::Image => &self.image_path,
            ProjectField::LinkUrl => &self.link_url,
            ProjectField::LinkTitle => &self.link_title,
            ProjectField::Technology => &self.technology,
            ProjectField::TestimonialClient => &self.testimonial_client,
            ProjectField::TestimonialText => &self.testimonial_text,
            _ => "",
        }
    }

    pub fn cursor(&self, field: ProjectField) -> usize {
        match field {
            ProjectField::Images => self.images_cursor.index(),
            ProjectField::Links => self.links_cursor.index(),
            ProjectField::Technologies => self.technologies_cursor.index(),
            ProjectField::Projects => self.projects_cursor.index(),
            _ => 0,
        }
    }

    pub fn add_link(&mut self, link: ProjectLink) -> Result<(), EditorError> {
        if !link.is_complete() {
            return Err(EditorError::Incomplete("link URL and title"));
        }
        self.editor.scratch_mut().links.push(link);
        Ok(())
    }

    pub fn remove_link(&mut self, index: usize) -> Result<(), EditorError> {
        remove_at(&mut self.editor.scratch_mut().links, index, "link")?;
        self.links_cursor.clamp(self.editor.scratch().links.len());
        Ok(())
    }

    /// Add a technology tag. Blank or repeated tags leave the list as is
    /// and return false.
    ///
    pub fn add_technology(&mut self, technology: &str) -> bool {
        let technology = technology.trim();
        let technologies = &mut self.editor.scratch_mut().technologies;
        if technology.is_empty() || technologies.iter().any(|t| t == technology) {
            return false;
        }
        technologies.push(technology.to_string());
        true
    }

    pub fn remove_technology(&mut self, index: usize) -> Result<(), EditorError> {
        remove_at(&mut self.editor.scratch_mut().technologies, index, "technology")?;
        self.technologies_cursor
            .clamp(self.editor.scratch().technologies.len());
        Ok(())
    }

    pub fn attach_image(&mut self, image: ImageRef) -> Result<(), EditorError> {
        let images = &mut self.editor.scratch_mut().images;
        if images.len() >= MAX_PROJECT_IMAGES {
            return Err(EditorError::ImageLimitReached(MAX_PROJECT_IMAGES));
        }
        images.push(image);
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) -> Result<(), EditorError> {
        remove_at(&mut self.editor.scratch_mut().images, index, "image")?;
        self.images_cursor.clamp(self.editor.scratch().images.len());
        Ok(())
    }

    pub fn set_testimonial(&mut self, testimonial: Testimonial) -> Result<(), EditorError> {
        if !testimonial.is_complete() {
            return Err(EditorError::Incomplete("testimonial client and text"));
        }
        self.editor.scratch_mut().testimonial = Some(testimonial);
        Ok(())
    }

    pub fn remove_testimonial(&mut self) {
        self.editor.scratch_mut().testimonial = None;
        self.testimonial_client.clear();
        self.testimonial_text.clear();
    }

    /// Commit the scratch project and return the full project list.
    ///
    pub fn save_project(&mut self, ids: &mut IdGenerator) -> Result<FreelancerPatch, EditorError> {
        self.projects = self.editor.commit(&self.projects, ids)?;
        self.clear_inputs();
        Ok(FreelancerPatch::projects(self.projects.clone()))
    }

    pub fn edit_project(&mut self, index: usize) -> Result<(), EditorError> {
        let testimonial = self
            .editor
            .begin_edit(&self.projects, index)?
            .testimonial
            .clone()
            .unwrap_or_default();
        self.clear_inputs();
        self.testimonial_client = testimonial.client;
        self.testimonial_text = testimonial.text;
        Ok(())
    }

    pub fn delete_project(&mut self, index: usize) -> Result<FreelancerPatch, EditorError> {
        let was_editing = self.editor.mode() == EditorMode::Edit(index);
        self.projects = self.editor.delete(&self.projects, index)?;
        if was_editing {
            self.clear_inputs();
        }
        self.projects_cursor.clamp(self.projects.len());
        Ok(FreelancerPatch::projects(self.projects.clone()))
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
        self.clear_inputs();
    }

    fn clear_inputs(&mut self) {
        self.image_path.clear();
        self.link_url.clear();
        self.link_title.clear();
        self.technology.clear();
        self.testimonial_client.clear();
        self.testimonial_text.clear();
        self.images_cursor = ListCursor::default();
        self.links_cursor = ListCursor::default();
        self.technologies_cursor = ListCursor::default();
    }

    fn attach_from_input(&mut self) -> Result<(), EditorError> {
        let image =
            ImageRef::from_path(&self.image_path).ok_or(EditorError::EmptyValue("Image path"))?;
        self.attach_image(image)?;
        self.image_path.clear();
        Ok(())
    }

    fn link_from_input(&mut self) -> Result<(), EditorError> {
        self.add_link(ProjectLink {
            url: self.link_url.trim().to_string(),
            title: self.link_title.trim().to_string(),
        })?;
        self.link_url.clear();
        self.link_title.clear();
        Ok(())
    }

    fn testimonial_from_input(&mut self) -> Result<(), EditorError> {
        self.set_testimonial(Testimonial {
            client: self.testimonial_client.trim().to_string(),
            text: self.testimonial_text.trim().to_string(),
        })
    }
}

fn remove_at<T>(list: &mut Vec<T>, index: usize, record: &'static str) -> Result<T, EditorError> {
    if index >= list.len() {
        return Err(EditorError::IndexOutOfRange { record, index });
    }
    Ok(list.remove(index))
}

impl Form for PortfolioStep {
    type Field = ProjectField;
    type Patch = FreelancerPatch;

    fn fields(&self) -> &'static [ProjectField] {
        &[
            ProjectField::Title,
            ProjectField::Description,
            ProjectField::Image,
            ProjectField::Images,
            ProjectField::LinkUrl,
            ProjectField::LinkTitle,
            ProjectField::Links,
            ProjectField::Technology,
            ProjectField::Technologies,
            ProjectField::TestimonialClient,
            ProjectField::TestimonialText,
            ProjectField::Save,
            ProjectField::Cancel,
            ProjectField::Projects,
        ]
    }

    fn text_mut(&mut self, field: ProjectField) -> Option<&mut String> {
        match field {
            ProjectField::Title => Some(&mut self.editor.scratch_mut().title),
            ProjectField::Description => Some(&mut self.editor.scratch_mut().description),
            ProjectField::Image => Some(&mut self.image_path),
            ProjectField::LinkUrl => Some(&mut self.link_url),
            ProjectField::LinkTitle => Some(&mut self.link_title),
            ProjectField::Technology => Some(&mut self.technology),
            ProjectField::TestimonialClient => Some(&mut self.testimonial_client),
            ProjectField::TestimonialText => Some(&mut self.testimonial_text),
            _ => None,
        }
    }

    fn step(&mut self, field: ProjectField, forward: bool) -> Option<FreelancerPatch> {
        let scratch = self.editor.scratch();
        match field {
            ProjectField::Images => self.images_cursor.step(scratch.images.len(), forward),
            ProjectField::Links => self.links_cursor.step(scratch.links.len(), forward),
            ProjectField::Technologies => self
                .technologies_cursor
                .step(scratch.technologies.len(), forward),
            ProjectField::Projects => self.projects_cursor.step(self.projects.len(), forward),
            _ => {}
        }
        None
    }

    fn activate(
        &mut self,
        field: ProjectField,
        ids: &mut IdGenerator,
    ) -> Result<Effect<FreelancerPatch>, EditorError> {
        match field {
            ProjectField::Image => self.attach_from_input()?,
            ProjectField::LinkUrl | ProjectField::LinkTitle => self.link_from_input()?,
            ProjectField::Technology => {
                let technology = std::mem::take(&mut self.technology);
                if !self.add_technology(&technology) {
                    self.technology = technology;
                }
            }
            ProjectField::TestimonialClient | ProjectField::TestimonialText => {
                self.testimonial_from_input()?
            }
            ProjectField::Save => return self.save_project(ids).map(Effect::Patch),
            ProjectField::Cancel => self.cancel_edit(),
            ProjectField::Projects => {
                if let Some(index) = self.projects_cursor.selected(self.projects.len()) {
                    self.edit_project(index)?;
                }
            }
            ProjectField::Images | ProjectField::Links | ProjectField::Technologies => {
                return Ok(self.remove(field).into())
            }
            ProjectField::Title | ProjectField::Description => {}
        }
        Ok(Effect::None)
    }

    fn remove(&mut self, field: ProjectField) -> Option<FreelancerPatch> {
        let scratch = self.editor.scratch();
        match field {
            ProjectField::Images => {
                let index = self.images_cursor.selected(scratch.images.len())?;
                self.remove_image(index).ok()?;
                None
            }
            ProjectField::Links => {
                let index = self.links_cursor.selected(scratch.links.len())?;
                self.remove_link(index).ok()?;
                None
            }
            ProjectField::Technologies => {
                let index = self.technologies_cursor.selected(scratch.technologies.len())?;
                self.remove_technology(index).ok()?;
                None
            }
            ProjectField::TestimonialClient | ProjectField::TestimonialText => {
                self.remove_testimonial();
                None
            }
            ProjectField::Projects => {
                let index = self.projects_cursor.selected(self.projects.len())?;
                self.delete_project(index).ok()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{handle_input, FormInput};
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::{Fake, Faker};

    fn step() -> PortfolioStep {
        PortfolioStep::from_draft(&FreelancerDraft::default())
    }

    fn fill_required(step: &mut PortfolioStep) {
        let title: String = Sentence(1..3).fake();
        let description: String = Paragraph(1..2).fake();
        *step.text_mut(ProjectField::Title).unwrap() = title;
        *step.text_mut(ProjectField::Description).unwrap() = description;
    }

    fn type_into(step: &mut PortfolioStep, field: ProjectField, text: &str, ids: &mut IdGenerator) {
        let focus = step.fields().iter().position(|f| *f == field).unwrap();
        for c in text.chars() {
            handle_input(step, focus, FormInput::Char(c), ids).unwrap();
        }
    }

    fn press(
        step: &mut PortfolioStep,
        field: ProjectField,
        input: FormInput,
        ids: &mut IdGenerator,
    ) -> Result<Effect<FreelancerPatch>, EditorError> {
        let focus = step.fields().iter().position(|f| *f == field).unwrap();
        handle_input(step, focus, input, ids)
    }

    #[test]
    fn duplicate_technology_is_a_no_op() {
        let mut step = step();
        assert!(step.add_technology("React"));
        let before = step.scratch().technologies.clone();
        assert!(!step.add_technology("React"));
        assert_eq!(step.scratch().technologies, before);
        assert!(!step.add_technology(" "));
    }

    #[test]
    fn incomplete_link_is_rejected() {
        let mut step = step();
        let result = step.add_link(ProjectLink {
            url: "https://example.tn".to_string(),
            title: String::new(),
        });
        assert_eq!(result, Err(EditorError::Incomplete("link URL and title")));
        assert!(step.scratch().links.is_empty());
    }

    #[test]
    fn duplicate_links_are_allowed() {
        let mut step = step();
        let link: ProjectLink = Faker.fake();
        let link = ProjectLink {
            url: format!("https://{}", link.url),
            title: format!("Live {}", link.title),
        };
        step.add_link(link.clone()).unwrap();
        step.add_link(link).unwrap();
        assert_eq!(step.scratch().links.len(), 2);
    }

    #[test]
    fn images_are_capped() {
        let mut step = step();
        for n in 0..MAX_PROJECT_IMAGES {
            let image = ImageRef::from_path(&format!("/tmp/shot-{}.png", n)).unwrap();
            step.attach_image(image).unwrap();
        }
        let extra = ImageRef::from_path("/tmp/extra.png").unwrap();
        assert_eq!(
            step.attach_image(extra),
            Err(EditorError::ImageLimitReached(MAX_PROJECT_IMAGES))
        );
        assert_eq!(step.scratch().images.len(), MAX_PROJECT_IMAGES);
        step.remove_image(0).unwrap();
        assert_eq!(step.scratch().images[0].name, "shot-1.png");
    }

    #[test]
    fn testimonial_requires_both_parts() {
        let mut step = step();
        let result = step.set_testimonial(Testimonial {
            client: "Amira".to_string(),
            text: String::new(),
        });
        assert!(result.is_err());
        assert_eq!(step.scratch().testimonial, None);

        let testimonial = Testimonial {
            client: "Amira".to_string(),
            text: "Delivered early".to_string(),
        };
        step.set_testimonial(testimonial.clone()).unwrap();
        assert_eq!(step.scratch().testimonial, Some(testimonial));
        step.remove_testimonial();
        assert_eq!(step.scratch().testimonial, None);
    }

    #[test]
    fn save_emits_full_list_and_resets_scratch() {
        let mut step = step();
        let mut ids = IdGenerator::new();
        fill_required(&mut step);
        step.add_technology("Figma");
        let patch = step.save_project(&mut ids).unwrap();
        let projects = patch.projects.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].technologies, vec!["Figma"]);
        assert_eq!(*step.scratch(), PortfolioProject::default());
    }

    #[test]
    fn failed_save_keeps_scratch() {
        let mut step = step();
        let mut ids = IdGenerator::new();
        step.add_technology("Figma");
        assert!(step.save_project(&mut ids).is_err());
        assert_eq!(step.scratch().technologies, vec!["Figma"]);
        assert!(step.projects().is_empty());
    }

    #[test]
    fn edit_loads_testimonial_into_inputs() {
        let mut step = step();
        let mut ids = IdGenerator::new();
        fill_required(&mut step);
        step.set_testimonial(Testimonial {
            client: "Yassine".to_string(),
            text: "Great work".to_string(),
        })
        .unwrap();
        step.save_project(&mut ids).unwrap();
        step.edit_project(0).unwrap();
        assert_eq!(step.mode(), EditorMode::Edit(0));
        assert_eq!(step.input(ProjectField::TestimonialClient), "Yassine");
    }

    #[test]
    fn keyboard_flow_adds_edits_and_deletes() {
        let mut step = step();
        let mut ids = IdGenerator::new();
        type_into(&mut step, ProjectField::Title, "Cafe branding", &mut ids);
        type_into(&mut step, ProjectField::Description, "Logo and menus", &mut ids);
        type_into(&mut step, ProjectField::Technology, "Illustrator", &mut ids);
        press(&mut step, ProjectField::Technology, FormInput::Activate, &mut ids).unwrap();
        type_into(&mut step, ProjectField::Image, "/home/me/logo.png", &mut ids);
        press(&mut step, ProjectField::Image, FormInput::Activate, &mut ids).unwrap();

        let effect = press(&mut step, ProjectField::Save, FormInput::Activate, &mut ids).unwrap();
        let Effect::Patch(patch) = effect else {
            panic!("save should emit a patch");
        };
        let saved = patch.projects.unwrap();
        assert_eq!(saved[0].title, "Cafe branding");
        assert_eq!(saved[0].images[0].name, "logo.png");

        press(&mut step, ProjectField::Projects, FormInput::Activate, &mut ids).unwrap();
        assert_eq!(step.mode(), EditorMode::Edit(0));
        type_into(&mut step, ProjectField::Title, "!", &mut ids);
        press(&mut step, ProjectField::Save, FormInput::Activate, &mut ids).unwrap();
        assert_eq!(step.projects()[0].title, "Cafe branding!");
        assert_eq!(step.projects()[0].id, saved[0].id);

        let effect = press(&mut step, ProjectField::Projects, FormInput::Remove, &mut ids).unwrap();
        assert_eq!(effect, Effect::Patch(FreelancerPatch::projects(vec![])));
    }

    #[test]
    fn deleting_edited_project_clears_inputs() {
        let mut step = step();
        let mut ids = IdGenerator::new();
        fill_required(&mut step);
        step.save_project(&mut ids).unwrap();
        step.edit_project(0).unwrap();
        step.link_url = "https://draft".to_string();
        step.delete_project(0).unwrap();
        assert_eq!(step.mode(), EditorMode::Create);
        assert_eq!(step.input(ProjectField::LinkUrl), "");
    }
}
