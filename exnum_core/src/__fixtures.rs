pub const SINGLE_SECTION: &str = "## Exercises
### Exercise 5: Foo
### Exercise 2: Bar
### Solution 9: Foo";

pub const SINGLE_SECTION_RENUMBERED: &str = "## Exercises
### Exercise 1: Foo
### Exercise 2: Bar
### Solution 1: Foo";

pub const TWO_CHAPTERS: &str = "# Chapter 1
## Exercises
### Exercise 7: A
# Chapter 2
## Exercises
### Exercise 3: B";

pub const TWO_CHAPTERS_RENUMBERED: &str = "# Chapter 1
## Exercises
### Exercise 1: A
# Chapter 2
## Exercises
### Exercise 1: B";

pub const EQUAL_LEVEL_BOUND: &str = "## Exercises
### Exercise 4: A
## Next Topic
### Exercise 9: B";

pub const EQUAL_LEVEL_BOUND_RENUMBERED: &str = "## Exercises
### Exercise 1: A
## Next Topic
### Exercise 9: B";

pub const NO_SECTIONS: &str = "# Types

Exercises are at the end of the book.
Exercise 4 covers unions.
### Exercise 4: Still alone
";

pub const NESTED_SECTIONS: &str = "## Exercises
### Exercise 3: Warm up
### Exercises: Bonus round
#### Exercise 8: Hard
#### Solution 8: Hard
### Exercise 6: Cool down
### Solution 5: Warm up";

pub const NESTED_SECTIONS_RENUMBERED: &str = "## Exercises
### Exercise 1: Warm up
### Exercises: Bonus round
#### Exercise 1: Hard
#### Solution 1: Hard
### Exercise 3: Cool down
### Solution 1: Warm up";

pub const SIBLING_RECAP: &str = "## Exercises
### Exercise 1: A
### Exercises recap
### Exercise 3: B
### Solution 6: A";

pub const SIBLING_RECAP_RENUMBERED: &str = "## Exercises
### Exercise 1: A
### Exercises recap
### Exercise 3: B
### Solution 1: A";

pub const ITEMS_OPENING_SECTIONS: &str = "## Exercises
### Exercise 4: Exercises on unions
#### Solution 2
### Exercise 9: Exercises on intersections
#### Solution 3";

pub const ITEMS_OPENING_SECTIONS_RENUMBERED: &str = "## Exercises
### Exercise 1: Exercises on unions
#### Solution 1
### Exercise 2: Exercises on intersections
#### Solution 1";

pub const FENCED_COMMENT: &str = "## Exercises
```bash
# install dependencies
```
### Exercise 3: After the fence";

pub const CHAPTER: &str = "# Generics

Some prose about Exercises in general.
### Exercise 9: Not in a section

## Exercises

### Exercise 4: Identity
Write `identity`.

### Solution 4: Identity

### Exercise 2: Pair

### Solution 7: Pair

## Summary

### Exercise 5: Outside again
";
