/// Lifecycle reactions the host delivers to a custom element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Element was inserted into a document
    Connected,
    /// Element was removed from its document
    Disconnected,
    /// An observed attribute was set, changed or removed
    AttributeChanged {
        name: String,
        old_value: Option<String>,
        new_value: Option<String>,
    },
}

/// Callbacks a custom element registers with the host environment.
///
/// Hosts either call the callbacks directly or queue [`LifecycleEvent`]s and hand
/// them over through [`ElementLifecycle::deliver`]. Attribute reactions are only
/// delivered for names listed in [`ElementLifecycle::observed_attributes`].
pub trait ElementLifecycle {
    /// Attribute names whose mutations trigger [`ElementLifecycle::attribute_changed_callback`].
    fn observed_attributes(&self) -> &'static [&'static str];

    fn connected_callback(&mut self);

    fn disconnected_callback(&mut self);

    fn attribute_changed_callback(&mut self, name: &str, old_value: Option<&str>, new_value: Option<&str>);

    /// Is `name` one of the observed attributes?
    fn observes(&self, name: &str) -> bool {
        self.observed_attributes()
            .iter()
            .any(|observed| observed.eq_ignore_ascii_case(name))
    }

    /// Delivers a queued reaction. Attribute reactions for unobserved names are dropped.
    fn deliver(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Connected => self.connected_callback(),
            LifecycleEvent::Disconnected => self.disconnected_callback(),
            LifecycleEvent::AttributeChanged {
                name,
                old_value,
                new_value,
            } => {
                if self.observes(&name) {
                    self.attribute_changed_callback(&name, old_value.as_deref(), new_value.as_deref());
                }
            }
        }
    }
}
