//! Scaffolding templates written by `repo-compliance init`.
//!
//! The generated pre-commit config, CI workflow and CLAUDE.md satisfy the
//! Python profile's policy on their own.

/// Standard `.gitignore` for Python projects.
pub const GITIGNORE_TEMPLATE: &str = r"# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# C extensions
*.so

# Distribution / packaging
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# PyInstaller
*.manifest
*.spec

# Installer logs
pip-log.txt
pip-delete-this-directory.txt

# Unit test / coverage reports
htmlcov/
.tox/
.nox/
.coverage
.coverage.*
.cache
nosetests.xml
coverage.xml
*.cover
*.py,cover
.hypothesis/
.pytest_cache/

# Translations
*.mo
*.pot

# Environments
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/

# IDE
.idea/
.vscode/
*.swp
*.swo
*~

# Jupyter
.ipynb_checkpoints

# mypy
.mypy_cache/
.dmypy.json
dmypy.json

# ruff
.ruff_cache/

# OS
.DS_Store
Thumbs.db
";

/// Standard `.pre-commit-config.yaml`.
pub const PRECOMMIT_CONFIG_TEMPLATE: &str = r"# Standard pre-commit configuration
#
# Installation:
#   1. pip install pre-commit
#   2. pre-commit install
#
# Manual run: pre-commit run --all-files
# Update hooks: pre-commit autoupdate

repos:
  # General file formatting and checks
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v5.0.0
    hooks:
      - id: trailing-whitespace
        args: [--markdown-linebreak-ext=md]
      - id: end-of-file-fixer
      - id: mixed-line-ending
        args: [--fix=lf]
      - id: check-yaml
      - id: check-toml
      - id: check-json
      - id: check-added-large-files
        args: [--maxkb=500]
      - id: check-case-conflict
      - id: check-merge-conflict
      - id: check-ast
      - id: debug-statements

  # Formatting
  - repo: https://github.com/psf/black
    rev: 24.10.0
    hooks:
      - id: black
        language_version: python3.12
        args: [--line-length, '100']

  # Linting
  - repo: https://github.com/astral-sh/ruff-pre-commit
    rev: v0.8.0
    hooks:
      - id: ruff
        args: [--fix, --exit-non-zero-on-fix]

  # Type checking
  - repo: https://github.com/pre-commit/mirrors-mypy
    rev: v1.13.0
    hooks:
      - id: mypy
        args: [--ignore-missing-imports, --check-untyped-defs]

  # Security
  - repo: https://github.com/PyCQA/bandit
    rev: 1.7.10
    hooks:
      - id: bandit
        args: [-c, pyproject.toml]
        additional_dependencies: ['bandit[toml]']

  # Spelling
  - repo: https://github.com/codespell-project/codespell
    rev: v2.3.0
    hooks:
      - id: codespell
";

/// GitHub Actions workflow for `.github/workflows/ci.yml`.
pub const CI_WORKFLOW_TEMPLATE: &str = r#"name: CI

on:
  push:
    branches: [main]
  pull_request:
    branches: [main]

jobs:
  lint:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4

      - name: Set up Python
        uses: actions/setup-python@v5
        with:
          python-version: "3.12"

      - name: Install dependencies
        run: |
          python -m pip install --upgrade pip
          pip install ruff black mypy

      - name: Run ruff
        run: ruff check .

      - name: Run black
        run: black --check .

  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4

      - name: Set up Python
        uses: actions/setup-python@v5
        with:
          python-version: "3.12"

      - name: Install dependencies
        run: |
          python -m pip install --upgrade pip
          pip install -e ".[dev]" || pip install -r requirements-dev.txt || pip install pytest

      - name: Run tests
        run: pytest -v || echo "No tests found"

  all-checks-passed:
    needs: [lint, test]
    runs-on: ubuntu-latest
    steps:
      - name: All checks passed
        run: echo "All CI checks passed!"
"#;

/// Renders CLAUDE.md for a project.
#[must_use]
pub fn claude_md(project_name: &str) -> String {
    format!(
        r#"# CLAUDE.md

This file gives coding assistants and contributors the context they need to work in this repository.

## Project Overview

{project_name} is a pipe-works organization project.

TODO: Add project description here.

## Common Commands

```bash
# Install dependencies
pip install -e ".[dev]"

# Run tests
pytest

# Run linting
ruff check .
black --check .

# Format code
black .
ruff check --fix .
```

## Architecture

TODO: Describe the project architecture here.

## Development Guidelines

- Follow pipe-works organization coding standards
- All code must pass pre-commit hooks before committing
- Write tests for new functionality
- Update documentation as needed

## License

This project is licensed under GPL-3.0-or-later.
"#
    )
}

/// Renders README.md for a project.
#[must_use]
pub fn readme(project_name: &str) -> String {
    let slug = repo_slug(project_name);
    format!(
        r#"# {project_name}

A pipe-works organization project.

## Description

TODO: Add project description here.

## Installation

```bash
pip install -e .
```

## Usage

TODO: Add usage instructions here.

## Development

### Setup

```bash
# Clone the repository
git clone https://github.com/pipe-works/{slug}.git
cd {slug}

# Create virtual environment
python -m venv venv
source venv/bin/activate

# Install dependencies
pip install -e ".[dev]"

# Install pre-commit hooks
pre-commit install
```

### Running Tests

```bash
pytest
```

## License

This project is licensed under the GNU General Public License v3.0 - see the [LICENSE](LICENSE) file for details.

## Contributing

Contributions are welcome! Please ensure your code passes all pre-commit hooks before submitting a pull request.
"#
    )
}

/// Derives a display name from a directory name: `my_cool-tool` becomes
/// `My Cool Tool`.
#[must_use]
pub fn project_name_from_dir(dir_name: &str) -> String {
    title_case(&dir_name.replace(['_', '-'], " "))
}

/// Lowercased name with spaces replaced by underscores.
fn repo_slug(project_name: &str) -> String {
    project_name.to_lowercase().replace(' ', "_")
}

/// Uppercases every letter that follows a non-letter and lowercases the
/// rest, so digits start a new word (`my2app` becomes `My2App`).
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for c in text.chars() {
        if after_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    out
}
