//! Fixed HTML email templates.
//!
//! Three milestone templates, each with a `{{name}}` placeholder in both
//! subject and body. Rendering is a global placeholder substitution.

/// Which milestone email to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Welcome,
    Day7,
    Day30,
}

/// A subject/body pair with `{{name}}` placeholders.
#[derive(Debug, Clone)]
pub struct EmailTemplate {
    pub subject: &'static str,
    pub html: &'static str,
}

/// Rendered template, placeholders substituted.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

const WELCOME: EmailTemplate = EmailTemplate {
    subject: "🙏 Welcome to SantVaani, {{name}}!",
    html: r#"<!DOCTYPE html>
<html>
<body style="font-family: Georgia, serif; background: #fff8ef; margin: 0; padding: 24px;">
  <div style="max-width: 560px; margin: auto; background: #ffffff; border-radius: 12px; padding: 32px; border: 1px solid #f0e0c8;">
    <h1 style="color: #b45309; text-align: center;">🪔 SantVaani</h1>
    <h2 style="color: #78350f;">Namaste {{name}},</h2>
    <p>Welcome to the SantVaani family! Your journey through the wisdom of the saints begins today.</p>
    <ul style="color: #57534e;">
      <li>Daily bhajans and teachings of the great saints</li>
      <li>Panchang and festival reminders</li>
      <li>The Living Saints gallery and divine stories</li>
    </ul>
    <p>May the blessings of the saints be with you, {{name}}.</p>
    <p style="color: #a8a29e; font-size: 13px; text-align: center;">Jai Shri Ram 🙏 — Team SantVaani</p>
  </div>
</body>
</html>"#,
};

const DAY7: EmailTemplate = EmailTemplate {
    subject: "✨ {{name}}, your first week with SantVaani",
    html: r#"<!DOCTYPE html>
<html>
<body style="font-family: Georgia, serif; background: #fff8ef; margin: 0; padding: 24px;">
  <div style="max-width: 560px; margin: auto; background: #ffffff; border-radius: 12px; padding: 32px; border: 1px solid #f0e0c8;">
    <h1 style="color: #b45309; text-align: center;">🪔 SantVaani</h1>
    <h2 style="color: #78350f;">Dear {{name}},</h2>
    <p>Seven days of satsang! A small step each day becomes a lifelong journey.</p>
    <p>This week, try the daily Panchang guide — it shows the tithi, auspicious
    muhurat windows, and upcoming festivals for each day.</p>
    <p>Keep walking the path, {{name}}.</p>
    <p style="color: #a8a29e; font-size: 13px; text-align: center;">With devotion — Team SantVaani</p>
  </div>
</body>
</html>"#,
};

const DAY30: EmailTemplate = EmailTemplate {
    subject: "🌺 One month of devotion, {{name}}!",
    html: r#"<!DOCTYPE html>
<html>
<body style="font-family: Georgia, serif; background: #fff8ef; margin: 0; padding: 24px;">
  <div style="max-width: 560px; margin: auto; background: #ffffff; border-radius: 12px; padding: 32px; border: 1px solid #f0e0c8;">
    <h1 style="color: #b45309; text-align: center;">🪔 SantVaani</h1>
    <h2 style="color: #78350f;">Dear {{name}},</h2>
    <p>A full month with SantVaani! As Kabir said, "Dheere dheere re mana,
    dheere sab kuch hoye" — slowly, slowly, everything comes in its time.</p>
    <p>Thank you for being part of this community. Your presence makes the
    satsang complete.</p>
    <p style="color: #a8a29e; font-size: 13px; text-align: center;">Hari Om 🙏 — Team SantVaani</p>
  </div>
</body>
</html>"#,
};

/// Look up the fixed template for a milestone.
pub fn template(kind: TemplateKind) -> EmailTemplate {
    match kind {
        TemplateKind::Welcome => WELCOME,
        TemplateKind::Day7 => DAY7,
        TemplateKind::Day30 => DAY30,
    }
}

/// Substitute every `{{name}}` occurrence in subject and body.
pub fn render_template(kind: TemplateKind, name: &str) -> RenderedEmail {
    let t = template(kind);
    RenderedEmail {
        subject: t.subject.replace("{{name}}", name),
        html: t.html.replace("{{name}}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_substitutes_every_placeholder() {
        let rendered = render_template(TemplateKind::Welcome, "Asha");
        assert!(rendered.subject.contains("Asha"));
        assert!(!rendered.subject.contains("{{name}}"));
        assert!(!rendered.html.contains("{{name}}"));
        // Body uses the name more than once
        assert!(rendered.html.matches("Asha").count() >= 2);
    }

    #[test]
    fn test_all_templates_have_placeholders() {
        for kind in [TemplateKind::Welcome, TemplateKind::Day7, TemplateKind::Day30] {
            let t = template(kind);
            assert!(t.subject.contains("{{name}}"), "{kind:?} subject");
            assert!(t.html.contains("{{name}}"), "{kind:?} body");
        }
    }
}
