use shared::domain::{Channel, ChannelValue, SliderProps};

/// A single labeled range input. The latest of a manual move or a reset wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledSlider {
    props: SliderProps,
    value: ChannelValue,
}

impl LabeledSlider {
    pub fn new(channel: Channel) -> Self {
        Self {
            props: channel.props(),
            value: 0,
        }
    }

    pub fn props(&self) -> SliderProps {
        self.props
    }

    pub fn channel(&self) -> Channel {
        self.props.channel
    }

    pub fn value(&self) -> ChannelValue {
        self.value
    }

    pub fn input(&mut self, value: ChannelValue) {
        self.value = value.clamp(self.props.min, self.props.max);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn label(&self) -> String {
        format!("{}:({})", self.props.name, self.value)
    }
}
