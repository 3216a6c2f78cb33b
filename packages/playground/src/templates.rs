//! Built-in snippet templates and viewport presets for the edit mode
//! toolbar.

/// Named starter snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetTemplate {
    pub name: &'static str,
    pub source: &'static str,
}

const BUILTIN_TEMPLATES: &[SnippetTemplate] = &[
    SnippetTemplate {
        name: "Basic Component",
        source: r#"function Demo() {
  return (
    <div className="p-4">
      <h2 className="text-primary">Hello World</h2>
      <Button variant="primary">Click Me</Button>
    </div>
  );
}"#,
    },
    SnippetTemplate {
        name: "Bootstrap Grid",
        source: r#"function GridDemo() {
  return (
    <Container>
      <Row className="mb-4">
        <Col md={4} className="bg-light p-3 border">Column 1</Col>
        <Col md={4} className="bg-light p-3 border">Column 2</Col>
        <Col md={4} className="bg-light p-3 border">Column 3</Col>
      </Row>
    </Container>
  );
}"#,
    },
    SnippetTemplate {
        name: "Bootstrap Navbar",
        source: r##"function BootstrapNavbar() {
  return (
    <nav className="navbar navbar-expand-lg navbar-dark bg-primary">
      <div className="container-fluid">
        <a className="navbar-brand" href="#">Brand</a>
        <div className="collapse navbar-collapse">
          <ul className="navbar-nav me-auto mb-2 mb-lg-0">
            <li className="nav-item">
              <a className="nav-link active" href="#">Home</a>
            </li>
            <li className="nav-item">
              <a className="nav-link" href="#">Features</a>
            </li>
            <li className="nav-item">
              <a className="nav-link" href="#">Pricing</a>
            </li>
          </ul>
          <div className="d-flex">
            <button className="btn btn-outline-light">Login</button>
          </div>
        </div>
      </div>
    </nav>
  );
}"##,
    },
    SnippetTemplate {
        name: "Card Layout",
        source: r#"function CardDemo() {
  return (
    <Card className="shadow-sm">
      <Card.Header className="bg-primary text-white">
        <FaReact className="me-2" />Featured
      </Card.Header>
      <Card.Body>
        <Card.Title>Special Card</Card.Title>
        <Card.Text>This is a special card with custom styling.</Card.Text>
        <Button variant="outline-primary">Learn More</Button>
      </Card.Body>
    </Card>
  );
}"#,
    },
    SnippetTemplate {
        name: "Tailwind Navbar",
        source: r#"const CustomNavbar = () => {
  return (
    <nav className="bg-purple-600 p-4">
      <div className="max-w-6xl mx-auto flex justify-between items-center text-white">
        <div className="text-2xl font-semibold">BrandName</div>
        <div className="flex gap-4">
          <button className="bg-white text-purple-600 px-4 py-1 rounded hover:bg-purple-100">Sign In</button>
          <button className="border border-white px-4 py-1 rounded hover:bg-purple-800">Sign Up</button>
        </div>
      </div>
    </nav>
  );
}"#,
    },
];

/// The template catalog, in menu order.
pub fn builtin_templates() -> &'static [SnippetTemplate] {
    BUILTIN_TEMPLATES
}

/// Find a template by its menu name.
pub fn template_named(name: &str) -> Option<&'static SnippetTemplate> {
    BUILTIN_TEMPLATES.iter().find(|t| t.name == name)
}

/// Preview viewport preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportPreset {
    pub label: &'static str,
    pub width: &'static str,
}

pub const VIEWPORT_PRESETS: &[ViewportPreset] = &[
    ViewportPreset {
        label: "Mobile S (320px)",
        width: "320px",
    },
    ViewportPreset {
        label: "Mobile L (425px)",
        width: "425px",
    },
    ViewportPreset {
        label: "Tablet (768px)",
        width: "768px",
    },
    ViewportPreset {
        label: "Laptop (1024px)",
        width: "1024px",
    },
    ViewportPreset {
        label: "Full Width",
        width: "100%",
    },
];

/// Default viewport: full width.
pub const DEFAULT_VIEWPORT_WIDTH: &str = "100%";

/// Find the preset matching a width value.
pub fn preset_for_width(width: &str) -> Option<&'static ViewportPreset> {
    VIEWPORT_PRESETS.iter().find(|p| p.width == width)
}
