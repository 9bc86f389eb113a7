use crate::ink::model::AnimationData;

/// Supplies the layout snapshot taken just before a morph starts.
pub trait AnimationDataSource {
    fn request_animation_data(&mut self) -> AnimationData;
}

/// Host whose layout never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticHost {
    data: AnimationData,
    requests: usize,
}

impl StaticHost {
    pub fn new(data: AnimationData) -> Self {
        Self { data, requests: 0 }
    }

    /// Number of snapshots handed out so far.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl AnimationDataSource for StaticHost {
    fn request_animation_data(&mut self) -> AnimationData {
        self.requests += 1;
        self.data
    }
}
