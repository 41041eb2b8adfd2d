//! Include/exclude filtering of resolver names.

use pothos_crud_config::CrudConfig;

/// Why a resolver was kept or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Listed in `includeResolversExact`
    IncludedExact,
    /// Matched `includeResolversContain`
    IncludedContain,
    /// No rule applied
    Kept,
    /// Missing from a non-empty include list
    NotIncluded,
    /// Listed in `excludeResolversExact`
    ExcludedExact,
    /// Matched `excludeResolversContain`
    ExcludedContain,
}

impl FilterDecision {
    pub fn keeps(&self) -> bool {
        matches!(
            self,
            FilterDecision::IncludedExact | FilterDecision::IncludedContain | FilterDecision::Kept
        )
    }

    pub fn reason(&self) -> &'static str {
        match self {
            FilterDecision::IncludedExact => "included by includeResolversExact",
            FilterDecision::IncludedContain => "included by includeResolversContain",
            FilterDecision::Kept => "kept",
            FilterDecision::NotIncluded => "not in the include list",
            FilterDecision::ExcludedExact => "excluded by excludeResolversExact",
            FilterDecision::ExcludedContain => "excluded by excludeResolversContain",
        }
    }
}

/// Resolver-name filter built from the `crud` config lists.
///
/// A non-empty include list decides membership on its own. Exclude lists are
/// only consulted when both include lists are empty.
#[derive(Debug, Clone, Default)]
pub struct ResolverFilter {
    include_exact: Vec<String>,
    include_contain: Vec<String>,
    exclude_exact: Vec<String>,
    exclude_contain: Vec<String>,
}

impl ResolverFilter {
    pub fn new(config: &CrudConfig) -> Self {
        Self {
            include_exact: config.include_resolvers_exact.clone(),
            include_contain: config.include_resolvers_contain.clone(),
            exclude_exact: config.exclude_resolvers_exact.clone(),
            exclude_contain: config.exclude_resolvers_contain.clone(),
        }
    }

    pub fn decide(&self, name: &str) -> FilterDecision {
        if !self.include_exact.is_empty() {
            return if self.include_exact.iter().any(|n| n == name) {
                FilterDecision::IncludedExact
            } else {
                FilterDecision::NotIncluded
            };
        }
        if !self.include_contain.is_empty() {
            return if self.include_contain.iter().any(|s| name.contains(s.as_str())) {
                FilterDecision::IncludedContain
            } else {
                FilterDecision::NotIncluded
            };
        }
        if self.exclude_exact.iter().any(|n| n == name) {
            return FilterDecision::ExcludedExact;
        }
        if self.exclude_contain.iter().any(|s| name.contains(s.as_str())) {
            return FilterDecision::ExcludedContain;
        }
        FilterDecision::Kept
    }

    pub fn keeps(&self, name: &str) -> bool {
        self.decide(name).keeps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(
        include_exact: &[&str],
        include_contain: &[&str],
        exclude_exact: &[&str],
        exclude_contain: &[&str],
    ) -> ResolverFilter {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        ResolverFilter::new(&CrudConfig {
            include_resolvers_exact: list(include_exact),
            include_resolvers_contain: list(include_contain),
            exclude_resolvers_exact: list(exclude_exact),
            exclude_resolvers_contain: list(exclude_contain),
            ..CrudConfig::default()
        })
    }

    #[test]
    fn test_no_rules_keeps_everything() {
        let f = filter(&[], &[], &[], &[]);
        assert_eq!(f.decide("findManyUser"), FilterDecision::Kept);
    }

    #[test]
    fn test_exclude_exact() {
        let f = filter(&[], &[], &["deleteOneUser"], &[]);
        assert!(!f.keeps("deleteOneUser"));
        assert!(f.keeps("deleteManyUser"));
    }

    #[test]
    fn test_exclude_contain() {
        let f = filter(&[], &[], &[], &["delete"]);
        assert!(!f.keeps("deleteOneUser"));
        assert!(!f.keeps("deleteManyPost"));
        assert!(f.keeps("createOneUser"));
    }

    #[test]
    fn test_include_exact_overrides_excludes() {
        let f = filter(&["deleteOneUser"], &["Post"], &["deleteOneUser"], &["User"]);
        assert_eq!(f.decide("deleteOneUser"), FilterDecision::IncludedExact);
        // include-contain is ignored once include-exact is set
        assert_eq!(f.decide("findManyPost"), FilterDecision::NotIncluded);
    }

    #[test]
    fn test_include_contain_overrides_excludes() {
        let f = filter(&[], &["User"], &["findManyUser"], &["User"]);
        assert_eq!(f.decide("findManyUser"), FilterDecision::IncludedContain);
        assert_eq!(f.decide("findManyPost"), FilterDecision::NotIncluded);
    }

    #[test]
    fn test_include_precedence_over_every_combination() {
        let names = ["findFirstUser", "countUser", "deleteManyPost"];
        for name in names {
            for exclude_exact in [vec![], vec![name]] {
                for exclude_contain in [vec![], vec!["User", "Post"]] {
                    let f = filter(&[name], &[], &exclude_exact, &exclude_contain);
                    assert!(f.keeps(name), "{name} must survive include-exact");

                    let f = filter(&[], &[name], &exclude_exact, &exclude_contain);
                    assert!(f.keeps(name), "{name} must survive include-contain");
                }
            }
        }
    }
}
