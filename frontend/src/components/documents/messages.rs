use saber_common::jobs::GenerationUpdate;

pub enum Msg {
    SetField(String, String),
    SaveDraft,
    Generate,
    Step(GenerationUpdate),
    Finished,
    Cancel,
    OpenInStudio,
}
